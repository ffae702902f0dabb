//! Storage layer for voyage
//!
//! `SQLite` (rusqlite + r2d2) for local use and tests, PostgreSQL (sqlx) for
//! deployments. Both implement the async store traits in [`traits`] and are
//! unified behind [`StorageBackend`].

pub mod backend;
pub mod error;
#[cfg(feature = "sqlite")]
mod migrations;
#[cfg(feature = "postgres")]
mod pg_migrations;
#[cfg(feature = "postgres")]
pub mod pg_storage;
#[cfg(feature = "sqlite")]
mod sqlite_async;
#[cfg(feature = "sqlite")]
mod storage;
#[cfg(all(test, feature = "sqlite"))]
mod tests;
pub mod traits;

pub use backend::StorageBackend;
pub use error::StorageError;
#[cfg(feature = "postgres")]
pub use pg_storage::PgStorage;
#[cfg(feature = "sqlite")]
pub use storage::Storage;

/// Current time at microsecond precision, the resolution both backends store.
pub(crate) fn now() -> chrono::DateTime<chrono::Utc> {
    voyage_core::to_stored_precision(chrono::Utc::now())
}
