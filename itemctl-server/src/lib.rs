//! itemctl-server: dated item records over HTTP
//!
//! Stores named numeric items tagged with a calendar date in a single
//! SQLite table and exposes list, upsert, sum and by-date endpoints.

pub mod db;
pub mod http;
pub mod models;

pub use db::{create_memory_pool, create_pool, ItemRepo};
pub use http::{build_router, run_server, AppState, ServerConfig};
