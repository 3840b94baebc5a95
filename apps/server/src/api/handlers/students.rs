//! Student endpoint handlers.

use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};

use crate::{
    models::{NewStudent, StudentFilter, UpdateStudent},
    state::AppState,
    Result,
};

pub async fn list_students(
    State(state): State<AppState>,
    Query(filter): Query<StudentFilter>,
) -> Result<Response> {
    let students = state.student_service.list(filter).await?;

    Ok((StatusCode::OK, Json(students)).into_response())
}

pub async fn get_student(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Response> {
    let student = state.student_service.get(id).await?;

    Ok((StatusCode::OK, Json(student)).into_response())
}

pub async fn create_student(
    State(state): State<AppState>,
    Json(payload): Json<NewStudent>,
) -> Result<Response> {
    let student = state.student_service.create(payload).await?;
    let location = format!("/api/v1/students/{}/", student.id);

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(student),
    )
        .into_response())
}

pub async fn update_student(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateStudent>,
) -> Result<Response> {
    let student = state.student_service.update(id, payload).await?;

    Ok((StatusCode::OK, Json(student)).into_response())
}

pub async fn delete_student(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Response> {
    state.student_service.delete(id).await?;

    Ok(StatusCode::NO_CONTENT.into_response())
}
