//! Shared constants for voyage.

/// PostgreSQL connection pool: maximum connections.
pub const PG_POOL_MAX_CONNECTIONS: u32 = 20;

/// PostgreSQL connection pool: acquire timeout in seconds.
pub const PG_POOL_ACQUIRE_TIMEOUT_SECS: u64 = 10;

/// PostgreSQL connection pool: idle timeout in seconds.
pub const PG_POOL_IDLE_TIMEOUT_SECS: u64 = 300;

/// SQLite connection pool size when `VOYAGE_DB_POOL_SIZE` is unset.
pub const DEFAULT_SQLITE_POOL_SIZE: u32 = 8;

/// Message returned by the activity reorder stub.
pub const REORDER_MESSAGE: &str = "Activities reordered";
