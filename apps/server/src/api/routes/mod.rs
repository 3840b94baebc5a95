use axum::{routing::get, Router};

use crate::api::handlers::{courses, students};
use crate::state::AppState;

/// Versioned API routes. Collection and instance paths keep their trailing
/// slash; `/api/v1/courses/{id}/` is the canonical instance URL.
pub fn api_v1_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/courses/",
            get(courses::list_courses).post(courses::create_course),
        )
        .route(
            "/courses/:id/",
            get(courses::get_course)
                .put(courses::update_course)
                .delete(courses::delete_course),
        )
        .route(
            "/students/",
            get(students::list_students).post(students::create_student),
        )
        .route(
            "/students/:id/",
            get(students::get_student)
                .put(students::update_student)
                .delete(students::delete_student),
        )
}
