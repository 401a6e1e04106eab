//! Item records and their projections

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Item record from database
///
/// `count` is stored as REAL and always serializes as a JSON float, so a
/// count of 5 appears as `5.0` on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Item {
    pub id: i64,
    pub name: String,
    pub count: f64,
    pub day: i64,
    pub month: i64,
    pub year: i64,
}

/// Name and count only, as returned by date queries
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct ItemSummary {
    pub name: String,
    pub count: f64,
}

/// Day/month/year triple.
///
/// No range checks: `day = 99` is a valid key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CalendarDate {
    pub day: i64,
    pub month: i64,
    pub year: i64,
}

impl CalendarDate {
    pub fn new(day: i64, month: i64, year: i64) -> Self {
        Self { day, month, year }
    }
}

/// Validated input for creating (or incrementing) an item
#[derive(Debug, Clone, PartialEq)]
pub struct NewItem {
    pub name: String,
    pub count: f64,
    pub date: CalendarDate,
}

impl NewItem {
    pub fn new(name: impl Into<String>, count: f64, date: CalendarDate) -> Self {
        Self {
            name: name.into(),
            count,
            date,
        }
    }
}
