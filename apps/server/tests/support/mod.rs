//! Shared test harness: an app over a private in-memory database, an HTTP
//! client driving the real router, and data factories.

use std::future::Future;
use std::pin::Pin;

use anyhow::Result;
use axum::{
    body::Body,
    http::{header, HeaderMap, Method, Request, StatusCode},
    Router,
};
use campus::{
    config::Config,
    db,
    models::{Course, NewCourse, NewStudent, Student},
    state::AppState,
};
use rand::{distributions::Alphanumeric, Rng};
use sqlx::sqlite::SqlitePoolOptions;
use tower::ServiceExt;

/// A fully wired application over its own in-memory database.
pub struct TestApp {
    pub state: AppState,
    router: Router,
}

impl TestApp {
    pub async fn new() -> Result<Self> {
        // A single connection keeps the in-memory database alive and shared
        // across sequential requests.
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await?;
        db::MIGRATOR.run(&pool).await?;

        let state = AppState::with_pool(Config::default(), pool);
        let router = campus::api::create_router(state.clone());

        Ok(Self { state, router })
    }

    /// Issue a request against the router, returning status, headers, body.
    pub async fn request(
        &self,
        method: Method,
        uri: &str,
        body: Option<Body>,
    ) -> Result<(StatusCode, HeaderMap, Vec<u8>)> {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(body)?,
            None => builder.body(Body::empty())?,
        };

        let response = self.router.clone().oneshot(request).await?;
        let status = response.status();
        let headers = response.headers().clone();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await?;

        Ok((status, headers, bytes.to_vec()))
    }
}

/// Run a test body against a fresh app.
pub async fn with_test_app<F>(f: F) -> Result<()>
where
    F: FnOnce(TestApp) -> Pin<Box<dyn Future<Output = Result<()>>>>,
{
    let app = TestApp::new().await?;
    f(app).await
}

pub fn to_json_body(value: &serde_json::Value) -> Result<Body> {
    Ok(Body::from(serde_json::to_vec(value)?))
}

/// Randomized record name, unique within a test with overwhelming odds.
pub fn random_name(prefix: &str) -> String {
    let suffix: String = rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(8)
        .map(char::from)
        .collect();
    format!("{prefix}-{suffix}")
}

/// Create `quantity` courses with randomized names through the service,
/// bypassing the HTTP surface.
pub async fn course_factory(app: &TestApp, quantity: usize) -> Result<Vec<Course>> {
    let mut courses = Vec::with_capacity(quantity);
    for _ in 0..quantity {
        let course = app
            .state
            .course_service
            .create(NewCourse {
                name: random_name("course"),
            })
            .await?;
        courses.push(course);
    }
    Ok(courses)
}

/// Create `quantity` students with randomized names through the service.
pub async fn student_factory(app: &TestApp, quantity: usize) -> Result<Vec<Student>> {
    let mut students = Vec::with_capacity(quantity);
    for _ in 0..quantity {
        let student = app
            .state
            .student_service
            .create(NewStudent {
                name: random_name("student"),
            })
            .await?;
        students.push(student);
    }
    Ok(students)
}
