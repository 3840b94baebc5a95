use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// A course as stored and served.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Course {
    pub id: i64,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Request body for `POST /api/v1/courses/`.
///
/// Identifiers are storage-assigned; unknown fields (including a client-sent
/// `id`) are dropped during deserialization.
#[derive(Debug, Deserialize, Validate)]
pub struct NewCourse {
    #[validate(length(min = 1, max = 200, message = "name must be 1-200 characters"))]
    pub name: String,
}

/// Request body for `PUT /api/v1/courses/{id}/`.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateCourse {
    #[validate(length(min = 1, max = 200, message = "name must be 1-200 characters"))]
    pub name: String,
}

/// Exact-match filters and result window for `GET /api/v1/courses/`.
///
/// Absent fields do not constrain the result. Unknown query parameters are
/// ignored.
#[derive(Debug, Default, Deserialize)]
pub struct CourseFilter {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}
