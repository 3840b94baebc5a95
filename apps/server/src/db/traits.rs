//! Storage seam between the services and the database.

use async_trait::async_trait;

use crate::{
    models::{Course, CourseFilter, Student, StudentFilter},
    Result,
};

/// Persistence operations required by the services.
///
/// Implementations assign identifiers and maintain the `created_at` /
/// `updated_at` timestamps; callers never supply either.
#[async_trait]
pub trait CatalogStore: Send + Sync {
    async fn create_course(&self, name: &str) -> Result<Course>;
    async fn get_course(&self, id: i64) -> Result<Option<Course>>;
    async fn list_courses(&self, filter: &CourseFilter) -> Result<Vec<Course>>;
    /// Returns `None` when no course with `id` exists.
    async fn update_course(&self, id: i64, name: &str) -> Result<Option<Course>>;
    /// Returns whether a row was deleted.
    async fn delete_course(&self, id: i64) -> Result<bool>;
    async fn count_courses(&self) -> Result<i64>;

    async fn create_student(&self, name: &str) -> Result<Student>;
    async fn get_student(&self, id: i64) -> Result<Option<Student>>;
    async fn list_students(&self, filter: &StudentFilter) -> Result<Vec<Student>>;
    async fn update_student(&self, id: i64, name: &str) -> Result<Option<Student>>;
    async fn delete_student(&self, id: i64) -> Result<bool>;
    async fn count_students(&self) -> Result<i64>;
}
