//! Integer row identifiers for categories and notes.

use std::fmt;
use std::str::FromStr;

/// Error returned when parsing an invalid row identifier.
#[derive(Debug, Clone)]
pub struct ParseIdError(String);

impl fmt::Display for ParseIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for ParseIdError {}

fn parse_row_id(s: &str, kind: &str) -> Result<i64, ParseIdError> {
    let trimmed = s.trim();
    match trimmed.parse::<i64>() {
        Ok(value) if value > 0 => Ok(value),
        _ => Err(ParseIdError(format!(
            "invalid {} id '{}': expected a positive integer",
            kind, trimmed
        ))),
    }
}

/// System-assigned identifier of a category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CategoryId(i64);

impl CategoryId {
    /// Wraps a raw row id.
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    /// Returns the raw row id.
    pub fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for CategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for CategoryId {
    type Err = ParseIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_row_id(s, "category").map(Self)
    }
}

/// System-assigned identifier of a note.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NoteId(i64);

impl NoteId {
    /// Wraps a raw row id.
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    /// Returns the raw row id.
    pub fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for NoteId {
    type Err = ParseIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_row_id(s, "note").map(Self)
    }
}
