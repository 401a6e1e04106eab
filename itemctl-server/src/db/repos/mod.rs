//! Repository implementations for database access
//!
//! Writes run inside a transaction; a failed write drops the transaction
//! uncommitted, which rolls it back.

pub mod items;

pub use items::{DbError, ItemRepo, Upserted, WriteOp};
