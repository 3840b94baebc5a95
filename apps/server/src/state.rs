//! Shared application state

use std::str::FromStr;
use std::sync::Arc;

use sqlx::{
    sqlite::{SqliteConnectOptions, SqlitePoolOptions},
    SqlitePool,
};

use crate::{
    config::Config,
    db::SqliteStore,
    services::{CourseService, StudentService},
    Result,
};

/// Shared application state passed to all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub db_pool: SqlitePool,
    pub course_service: Arc<CourseService>,
    pub student_service: Arc<StudentService>,
}

impl AppState {
    /// Initialize the application state: connect, migrate, wire services.
    pub async fn new(config: Config) -> Result<Self> {
        tracing::info!("Initializing application state...");

        let db_pool = create_db_pool(&config).await?;

        tracing::info!("Running database migrations...");
        crate::db::MIGRATOR
            .run(&db_pool)
            .await
            .map_err(|e| crate::Error::Internal(format!("Migration failed: {e}")))?;

        Ok(Self::with_pool(config, db_pool))
    }

    /// Wire services over an existing, already-migrated pool. Tests use this
    /// with per-test in-memory databases.
    pub fn with_pool(config: Config, db_pool: SqlitePool) -> Self {
        let store = SqliteStore::new(db_pool.clone());
        let course_service = Arc::new(CourseService::new(store.clone()));
        let student_service = Arc::new(StudentService::new(store));

        Self {
            config: Arc::new(config),
            db_pool,
            course_service,
            student_service,
        }
    }
}

async fn create_db_pool(config: &Config) -> Result<SqlitePool> {
    tracing::info!(url = %config.database.url, "Creating database connection pool...");

    let options = SqliteConnectOptions::from_str(&config.database.url)?.create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(config.database.pool_max_size)
        .acquire_timeout(std::time::Duration::from_secs(
            config.database.pool_timeout_seconds,
        ))
        .connect_with(options)
        .await?;

    tracing::info!(
        "Database pool created (max connections: {})",
        config.database.pool_max_size
    );

    Ok(pool)
}
