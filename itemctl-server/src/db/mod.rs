//! Database layer - connection pool, schema and repositories
//!
//! - File-backed SQLite through a sqlx pool, no global handle
//! - Schema created by an explicit, idempotent migration step
//! - Transactions for every write

pub mod migrations;
pub mod pool;
pub mod repos;

pub use pool::{create_memory_pool, create_pool, create_pool_with_options};
pub use repos::*;
