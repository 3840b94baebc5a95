use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// A student as stored and served.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Student {
    pub id: i64,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Request body for `POST /api/v1/students/`.
#[derive(Debug, Deserialize, Validate)]
pub struct NewStudent {
    #[validate(length(min = 1, max = 200, message = "name must be 1-200 characters"))]
    pub name: String,
}

/// Request body for `PUT /api/v1/students/{id}/`.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateStudent {
    #[validate(length(min = 1, max = 200, message = "name must be 1-200 characters"))]
    pub name: String,
}

/// Exact-match filters and result window for `GET /api/v1/students/`.
#[derive(Debug, Default, Deserialize)]
pub struct StudentFilter {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}
