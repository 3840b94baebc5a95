//! Business logic layer
//!
//! Services sit between the HTTP handlers and the store. They own payload
//! validation and the not-found mapping; handlers stay thin.

pub mod courses;
pub mod students;

pub use courses::CourseService;
pub use students::StudentService;

use validator::Validate;

use crate::{Error, Result};

pub(crate) fn validate_payload(payload: &impl Validate) -> Result<()> {
    payload.validate().map_err(|e| Error::Validation(e.to_string()))
}
