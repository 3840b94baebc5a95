//! Course operations - validation and orchestration over the store.

use crate::{
    db::{CatalogStore, SqliteStore},
    models::{Course, CourseFilter, NewCourse, UpdateCourse},
    services::validate_payload,
    Error, Result,
};

pub struct CourseService {
    store: SqliteStore,
}

impl CourseService {
    pub fn new(store: SqliteStore) -> Self {
        Self { store }
    }

    /// Create a course (POST /api/v1/courses/).
    ///
    /// Identifiers are storage-assigned; any client-sent id was already
    /// dropped during deserialization.
    pub async fn create(&self, payload: NewCourse) -> Result<Course> {
        validate_payload(&payload)?;
        self.store.create_course(&payload.name).await
    }

    /// Retrieve a course by id (GET /api/v1/courses/{id}/).
    pub async fn get(&self, id: i64) -> Result<Course> {
        self.store
            .get_course(id)
            .await?
            .ok_or(Error::NotFound {
                resource: "course",
                id,
            })
    }

    /// List courses with optional exact-match filters (GET /api/v1/courses/).
    pub async fn list(&self, filter: CourseFilter) -> Result<Vec<Course>> {
        self.store.list_courses(&filter).await
    }

    /// Replace a course's representation (PUT /api/v1/courses/{id}/).
    pub async fn update(&self, id: i64, payload: UpdateCourse) -> Result<Course> {
        validate_payload(&payload)?;
        self.store
            .update_course(id, &payload.name)
            .await?
            .ok_or(Error::NotFound {
                resource: "course",
                id,
            })
    }

    /// Delete a course (DELETE /api/v1/courses/{id}/).
    pub async fn delete(&self, id: i64) -> Result<()> {
        if !self.store.delete_course(id).await? {
            return Err(Error::NotFound {
                resource: "course",
                id,
            });
        }
        Ok(())
    }

    pub async fn count(&self) -> Result<i64> {
        self.store.count_courses().await
    }
}
