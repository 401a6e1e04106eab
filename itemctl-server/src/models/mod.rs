//! Domain models with validation at construction
//!
//! Request bodies are read leniently into payload types, then validated
//! into the types the store accepts. Invalid input returns
//! ValidationError, not panic.

pub mod item;
pub mod payload;
pub mod validation;

pub use item::{CalendarDate, Item, ItemSummary, NewItem};
pub use payload::{CreateItemPayload, DateQueryPayload, PresenceRule};
pub use validation::ValidationError;
