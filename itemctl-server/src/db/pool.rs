//! Database connection pool management
//!
//! Uses sqlx SqlitePool with explicit connection limits.

use std::path::Path;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;

/// Default maximum connections for the pool.
const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Open (or create) the SQLite database file at `path`.
///
/// # Errors
///
/// Returns an error if the file cannot be opened or created.
///
/// # Example
///
/// ```ignore
/// let pool = create_pool(Path::new("app.db")).await?;
/// ```
pub async fn create_pool(path: &Path) -> Result<SqlitePool, sqlx::Error> {
    create_pool_with_options(path, DEFAULT_MAX_CONNECTIONS).await
}

/// Open (or create) the SQLite database with custom options.
///
/// # Arguments
///
/// * `path` - Database file path
/// * `max_connections` - Maximum number of connections in the pool
pub async fn create_pool_with_options(
    path: &Path,
    max_connections: u32,
) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::new()
        .filename(path)
        .create_if_missing(true);

    SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect_with(options)
        .await
}

/// In-memory database for tests.
///
/// Each SQLite memory connection is its own database, so the pool is held
/// at exactly one connection that never expires.
pub async fn create_memory_pool() -> Result<SqlitePool, sqlx::Error> {
    SqlitePoolOptions::new()
        .max_connections(1)
        .min_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await
}
