//! Health endpoint and response-header posture.

#[allow(unused)]
mod support;

use axum::http::{Method, StatusCode};
use support::*;

#[tokio::test]
async fn health_returns_ok() -> anyhow::Result<()> {
    with_test_app(|app| {
        Box::pin(async move {
            let (status, _headers, body) = app.request(Method::GET, "/health", None).await?;

            assert_eq!(status, StatusCode::OK);
            let data: serde_json::Value = serde_json::from_slice(&body)?;
            assert_eq!(data["status"], "ok");

            Ok(())
        })
    })
    .await
}

#[tokio::test]
async fn responses_carry_security_headers() -> anyhow::Result<()> {
    with_test_app(|app| {
        Box::pin(async move {
            let (_status, headers, _body) = app.request(Method::GET, "/health", None).await?;

            assert_eq!(
                headers.get("x-content-type-options").map(|v| v.as_bytes()),
                Some(b"nosniff".as_slice())
            );
            assert_eq!(
                headers.get("x-frame-options").map(|v| v.as_bytes()),
                Some(b"DENY".as_slice())
            );

            Ok(())
        })
    })
    .await
}
