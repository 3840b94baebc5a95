//! Course endpoint handlers.

use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};

use crate::{
    models::{CourseFilter, NewCourse, UpdateCourse},
    state::AppState,
    Result,
};

pub async fn list_courses(
    State(state): State<AppState>,
    Query(filter): Query<CourseFilter>,
) -> Result<Response> {
    let courses = state.course_service.list(filter).await?;

    Ok((StatusCode::OK, Json(courses)).into_response())
}

pub async fn get_course(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Response> {
    let course = state.course_service.get(id).await?;

    Ok((StatusCode::OK, Json(course)).into_response())
}

pub async fn create_course(
    State(state): State<AppState>,
    Json(payload): Json<NewCourse>,
) -> Result<Response> {
    let course = state.course_service.create(payload).await?;
    let location = format!("/api/v1/courses/{}/", course.id);

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(course),
    )
        .into_response())
}

pub async fn update_course(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateCourse>,
) -> Result<Response> {
    let course = state.course_service.update(id, payload).await?;

    Ok((StatusCode::OK, Json(course)).into_response())
}

pub async fn delete_course(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Response> {
    state.course_service.delete(id).await?;

    Ok(StatusCode::NO_CONTENT.into_response())
}
