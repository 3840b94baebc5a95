//! Student operations - same shape as the course service.

use crate::{
    db::{CatalogStore, SqliteStore},
    models::{NewStudent, Student, StudentFilter, UpdateStudent},
    services::validate_payload,
    Error, Result,
};

pub struct StudentService {
    store: SqliteStore,
}

impl StudentService {
    pub fn new(store: SqliteStore) -> Self {
        Self { store }
    }

    pub async fn create(&self, payload: NewStudent) -> Result<Student> {
        validate_payload(&payload)?;
        self.store.create_student(&payload.name).await
    }

    pub async fn get(&self, id: i64) -> Result<Student> {
        self.store
            .get_student(id)
            .await?
            .ok_or(Error::NotFound {
                resource: "student",
                id,
            })
    }

    pub async fn list(&self, filter: StudentFilter) -> Result<Vec<Student>> {
        self.store.list_students(&filter).await
    }

    pub async fn update(&self, id: i64, payload: UpdateStudent) -> Result<Student> {
        validate_payload(&payload)?;
        self.store
            .update_student(id, &payload.name)
            .await?
            .ok_or(Error::NotFound {
                resource: "student",
                id,
            })
    }

    pub async fn delete(&self, id: i64) -> Result<()> {
        if !self.store.delete_student(id).await? {
            return Err(Error::NotFound {
                resource: "student",
                id,
            });
        }
        Ok(())
    }

    pub async fn count(&self) -> Result<i64> {
        self.store.count_students().await
    }
}
