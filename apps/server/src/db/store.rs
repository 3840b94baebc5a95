//! SQLite-backed `CatalogStore` implementation

use async_trait::async_trait;
use chrono::Utc;
use sqlx::SqlitePool;

use crate::{
    db::traits::CatalogStore,
    models::{Course, CourseFilter, Student, StudentFilter},
    Result,
};

#[derive(Clone)]
pub struct SqliteStore {
    pub(crate) pool: SqlitePool,
}

impl SqliteStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CatalogStore for SqliteStore {
    async fn create_course(&self, name: &str) -> Result<Course> {
        let now = Utc::now();

        let id = sqlx::query(
            "INSERT INTO courses (name, created_at, updated_at) VALUES (?, ?, ?)",
        )
        .bind(name)
        .bind(now)
        .bind(now)
        .execute(&self.pool)
        .await?
        .last_insert_rowid();

        Ok(Course {
            id,
            name: name.to_string(),
            created_at: now,
            updated_at: now,
        })
    }

    async fn get_course(&self, id: i64) -> Result<Option<Course>> {
        let course = sqlx::query_as::<_, Course>(
            "SELECT id, name, created_at, updated_at FROM courses WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(course)
    }

    async fn list_courses(&self, filter: &CourseFilter) -> Result<Vec<Course>> {
        // A negative LIMIT means "no limit" in SQLite.
        let limit = filter.limit.unwrap_or(-1);
        let offset = filter.offset.unwrap_or(0);

        let courses = sqlx::query_as::<_, Course>(
            "SELECT id, name, created_at, updated_at
             FROM courses
             WHERE (?1 IS NULL OR id = ?1)
               AND (?2 IS NULL OR name = ?2)
             ORDER BY id ASC
             LIMIT ?3 OFFSET ?4",
        )
        .bind(filter.id)
        .bind(filter.name.as_deref())
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        Ok(courses)
    }

    async fn update_course(&self, id: i64, name: &str) -> Result<Option<Course>> {
        let now = Utc::now();

        let affected = sqlx::query("UPDATE courses SET name = ?, updated_at = ? WHERE id = ?")
            .bind(name)
            .bind(now)
            .bind(id)
            .execute(&self.pool)
            .await?
            .rows_affected();

        if affected == 0 {
            return Ok(None);
        }

        self.get_course(id).await
    }

    async fn delete_course(&self, id: i64) -> Result<bool> {
        let affected = sqlx::query("DELETE FROM courses WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?
            .rows_affected();

        Ok(affected > 0)
    }

    async fn count_courses(&self) -> Result<i64> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM courses")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }

    async fn create_student(&self, name: &str) -> Result<Student> {
        let now = Utc::now();

        let id = sqlx::query(
            "INSERT INTO students (name, created_at, updated_at) VALUES (?, ?, ?)",
        )
        .bind(name)
        .bind(now)
        .bind(now)
        .execute(&self.pool)
        .await?
        .last_insert_rowid();

        Ok(Student {
            id,
            name: name.to_string(),
            created_at: now,
            updated_at: now,
        })
    }

    async fn get_student(&self, id: i64) -> Result<Option<Student>> {
        let student = sqlx::query_as::<_, Student>(
            "SELECT id, name, created_at, updated_at FROM students WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(student)
    }

    async fn list_students(&self, filter: &StudentFilter) -> Result<Vec<Student>> {
        let limit = filter.limit.unwrap_or(-1);
        let offset = filter.offset.unwrap_or(0);

        let students = sqlx::query_as::<_, Student>(
            "SELECT id, name, created_at, updated_at
             FROM students
             WHERE (?1 IS NULL OR id = ?1)
               AND (?2 IS NULL OR name = ?2)
             ORDER BY id ASC
             LIMIT ?3 OFFSET ?4",
        )
        .bind(filter.id)
        .bind(filter.name.as_deref())
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        Ok(students)
    }

    async fn update_student(&self, id: i64, name: &str) -> Result<Option<Student>> {
        let now = Utc::now();

        let affected = sqlx::query("UPDATE students SET name = ?, updated_at = ? WHERE id = ?")
            .bind(name)
            .bind(now)
            .bind(id)
            .execute(&self.pool)
            .await?
            .rows_affected();

        if affected == 0 {
            return Ok(None);
        }

        self.get_student(id).await
    }

    async fn delete_student(&self, id: i64) -> Result<bool> {
        let affected = sqlx::query("DELETE FROM students WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?
            .rows_affected();

        Ok(affected > 0)
    }

    async fn count_students(&self) -> Result<i64> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM students")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}
