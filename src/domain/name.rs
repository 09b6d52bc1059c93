//! Validated category names and note titles.

use std::fmt;
use std::str::FromStr;

/// Error returned when a category name or note title is invalid.
#[derive(Debug, Clone)]
pub struct ParseNameError(String);

impl fmt::Display for ParseNameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for ParseNameError {}

fn normalize(s: &str, what: &str) -> Result<String, ParseNameError> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return Err(ParseNameError(format!("{} cannot be empty", what)));
    }
    Ok(trimmed.to_string())
}

/// The name of a category.
///
/// Surrounding whitespace is trimmed and the result must be non-empty.
/// Names are compared exactly; uniqueness is enforced by the store.
///
/// # Examples
///
/// ```
/// use glacier::domain::CategoryName;
///
/// let name = CategoryName::new("  Work ").unwrap();
/// assert_eq!(name.as_str(), "Work");
/// assert!(CategoryName::new("   ").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CategoryName(String);

impl CategoryName {
    /// Creates a category name, trimming surrounding whitespace.
    ///
    /// # Errors
    ///
    /// Returns `ParseNameError` if the name is empty or whitespace-only.
    pub fn new(s: &str) -> Result<Self, ParseNameError> {
        normalize(s, "category name").map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CategoryName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for CategoryName {
    type Err = ParseNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

/// The title of a note. Trimmed, non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NoteTitle(String);

impl NoteTitle {
    /// Creates a note title, trimming surrounding whitespace.
    ///
    /// # Errors
    ///
    /// Returns `ParseNameError` if the title is empty or whitespace-only.
    pub fn new(s: &str) -> Result<Self, ParseNameError> {
        normalize(s, "note title").map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NoteTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for NoteTitle {
    type Err = ParseNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}
