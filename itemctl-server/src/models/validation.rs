//! Validation error types

use std::fmt;

/// Validation error for request payloads
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// One of name/count/day/month/year is missing on create
    NotAllDataEntered,

    /// One of day/month/year is missing on a date query
    DateRequired,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotAllDataEntered => write!(f, "not all data entered"),
            Self::DateRequired => write!(f, "day, month and year are required"),
        }
    }
}

impl std::error::Error for ValidationError {}
