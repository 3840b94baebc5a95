//! Storage layer.

mod store;
mod traits;

pub use store::SqliteStore;
pub use traits::CatalogStore;

/// Embedded schema migrations, applied at startup and by the test harness.
pub static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!("./migrations");
