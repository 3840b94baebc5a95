//! Persisted records and API payload types.

mod course;
mod student;

pub use course::{Course, CourseFilter, NewCourse, UpdateCourse};
pub use student::{NewStudent, Student, StudentFilter, UpdateStudent};
