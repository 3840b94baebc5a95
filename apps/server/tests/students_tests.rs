//! Integration tests for the students CRUD API.
//!
//! The students endpoints mirror the courses endpoints, so this suite covers
//! the full lifecycle in one pass plus the filters.

#[allow(unused)]
mod support;

use anyhow::Context as _;
use axum::http::{Method, StatusCode};
use serde_json::json;
use support::*;

#[tokio::test]
async fn student_lifecycle_create_read_update_delete() -> anyhow::Result<()> {
    with_test_app(|app| {
        Box::pin(async move {
            let (status, headers, body) = app
                .request(
                    Method::POST,
                    "/api/v1/students/",
                    Some(to_json_body(&json!({ "name": "Ada Lovelace" }))?),
                )
                .await?;
            assert_eq!(status, StatusCode::CREATED);
            assert!(headers.get("location").is_some());
            let created: serde_json::Value = serde_json::from_slice(&body)?;
            let id = created["id"].as_i64().context("created student has id")?;

            let (status, _headers, body) = app
                .request(Method::GET, &format!("/api/v1/students/{id}/"), None)
                .await?;
            assert_eq!(status, StatusCode::OK);
            let read: serde_json::Value = serde_json::from_slice(&body)?;
            assert_eq!(read["name"], "Ada Lovelace");

            let (status, _headers, body) = app
                .request(
                    Method::PUT,
                    &format!("/api/v1/students/{id}/"),
                    Some(to_json_body(&json!({ "name": "Ada King" }))?),
                )
                .await?;
            assert_eq!(status, StatusCode::OK);
            let updated: serde_json::Value = serde_json::from_slice(&body)?;
            assert_eq!(updated["name"], "Ada King");

            let (status, _headers, _body) = app
                .request(Method::DELETE, &format!("/api/v1/students/{id}/"), None)
                .await?;
            assert_eq!(status, StatusCode::NO_CONTENT);

            let (status, _headers, _body) = app
                .request(Method::GET, &format!("/api/v1/students/{id}/"), None)
                .await?;
            assert_eq!(status, StatusCode::NOT_FOUND);

            Ok(())
        })
    })
    .await
}

#[tokio::test]
async fn students_list_supports_exact_match_filters() -> anyhow::Result<()> {
    with_test_app(|app| {
        Box::pin(async move {
            let students = student_factory(&app, 10).await?;
            let picked = &students[4];

            let (status, _headers, body) = app
                .request(Method::GET, "/api/v1/students/", None)
                .await?;
            assert_eq!(status, StatusCode::OK);
            let data: serde_json::Value = serde_json::from_slice(&body)?;
            assert_eq!(data.as_array().map(|a| a.len()), Some(students.len()));

            let (status, _headers, body) = app
                .request(
                    Method::GET,
                    &format!("/api/v1/students/?name={}", picked.name),
                    None,
                )
                .await?;
            assert_eq!(status, StatusCode::OK);
            let data: serde_json::Value = serde_json::from_slice(&body)?;
            let items = data.as_array().context("response is a JSON array")?;
            assert_eq!(items.len(), 1);
            assert_eq!(items[0]["id"], picked.id);

            Ok(())
        })
    })
    .await
}

#[tokio::test]
async fn student_create_rejects_empty_name() -> anyhow::Result<()> {
    with_test_app(|app| {
        Box::pin(async move {
            let (status, _headers, _body) = app
                .request(
                    Method::POST,
                    "/api/v1/students/",
                    Some(to_json_body(&json!({ "name": "" }))?),
                )
                .await?;

            assert_eq!(status, StatusCode::BAD_REQUEST);
            assert_eq!(app.state.student_service.count().await?, 0);

            Ok(())
        })
    })
    .await
}
