//! Note modification timestamps and their stored text form.

use chrono::{DateTime, NaiveDateTime, Utc};
use std::fmt;
use std::str::FromStr;

/// Error returned when a stored timestamp cannot be decoded.
#[derive(Debug, Clone)]
pub struct ParseTimestampError(String);

impl fmt::Display for ParseTimestampError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for ParseTimestampError {}

const STORAGE_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.6f";

/// A UTC instant as stored in `notes.updated_at`.
///
/// Written in SQLite's `CURRENT_TIMESTAMP` layout extended to fixed-width
/// microseconds (`2024-01-15 10:30:00.000000`). Text order then equals time
/// order, including against rows SQLite stamped itself (`2024-01-15 10:30:00`).
/// Parsing also accepts RFC 3339.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    pub fn new(instant: DateTime<Utc>) -> Self {
        Self(instant)
    }

    pub fn as_datetime(&self) -> DateTime<Utc> {
        self.0
    }

    /// Returns the stored text form.
    pub fn to_storage_string(&self) -> String {
        self.0.format(STORAGE_FORMAT).to_string()
    }

    /// Parses the stored form (with or without fraction) or RFC 3339.
    pub fn parse(s: &str) -> Result<Self, ParseTimestampError> {
        let s = s.trim();
        if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
            return Ok(Self(dt.with_timezone(&Utc)));
        }
        NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S%.f")
            .map(|naive| Self(naive.and_utc()))
            .map_err(|e| ParseTimestampError(format!("invalid timestamp '{}': {}", s, e)))
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d %H:%M"))
    }
}

impl FromStr for Timestamp {
    type Err = ParseTimestampError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
