//! Lenient request payloads
//!
//! Bodies are read as loose JSON: a field with the wrong JSON type is
//! treated as absent, and a body that is not an object reads as `{}`.
//! Presence checks happen in `validate`/`into_date`.

use serde_json::Value;

use super::{CalendarDate, NewItem, ValidationError};

/// How create input decides that a field is missing
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PresenceRule {
    /// Zero numbers and an empty name count as missing.
    #[default]
    Truthy,

    /// Only null/absent counts as missing; zero is accepted.
    /// The name must still be non-empty.
    Explicit,
}

/// Body of POST /items
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CreateItemPayload {
    pub name: Option<String>,
    pub count: Option<f64>,
    pub day: Option<i64>,
    pub month: Option<i64>,
    pub year: Option<i64>,
}

impl CreateItemPayload {
    pub fn from_json(value: &Value) -> Self {
        Self {
            name: value.get("name").and_then(Value::as_str).map(str::to_owned),
            count: value.get("count").and_then(Value::as_f64),
            day: int_field(value, "day"),
            month: int_field(value, "month"),
            year: int_field(value, "year"),
        }
    }

    /// Check that every field is present under `rule`.
    pub fn validate(self, rule: PresenceRule) -> Result<NewItem, ValidationError> {
        let (Some(name), Some(count), Some(day), Some(month), Some(year)) =
            (self.name, self.count, self.day, self.month, self.year)
        else {
            return Err(ValidationError::NotAllDataEntered);
        };

        if name.is_empty() {
            return Err(ValidationError::NotAllDataEntered);
        }

        if rule == PresenceRule::Truthy
            && (count == 0.0 || day == 0 || month == 0 || year == 0)
        {
            return Err(ValidationError::NotAllDataEntered);
        }

        Ok(NewItem::new(name, count, CalendarDate::new(day, month, year)))
    }
}

/// Body of POST /items-by-date
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DateQueryPayload {
    pub day: Option<i64>,
    pub month: Option<i64>,
    pub year: Option<i64>,
}

impl DateQueryPayload {
    pub fn from_json(value: &Value) -> Self {
        Self {
            day: int_field(value, "day"),
            month: int_field(value, "month"),
            year: int_field(value, "year"),
        }
    }

    /// Zero is a valid value here; only absent fields are rejected.
    pub fn into_date(self) -> Result<CalendarDate, ValidationError> {
        match (self.day, self.month, self.year) {
            (Some(day), Some(month), Some(year)) => Ok(CalendarDate::new(day, month, year)),
            _ => Err(ValidationError::DateRequired),
        }
    }
}

/// Integer field, accepting integral floats such as `1.0`.
fn int_field(value: &Value, key: &str) -> Option<i64> {
    let field = value.get(key)?;
    field.as_i64().or_else(|| {
        field
            .as_f64()
            .filter(|f| f.fract() == 0.0 && f.abs() < i64::MAX as f64)
            .map(|f| f as i64)
    })
}
