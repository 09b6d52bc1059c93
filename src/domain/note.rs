//! Note records and the partial-update request.

use super::{CategoryId, ContentFormat, NoteId, NoteTitle, Timestamp};

// ===========================================
// Note
// ===========================================

/// A fully loaded note.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Note {
    id: NoteId,
    category_id: CategoryId,
    title: String,
    content: String,
    updated_at: Timestamp,
}

impl Note {
    pub fn new(
        id: NoteId,
        category_id: CategoryId,
        title: impl Into<String>,
        content: impl Into<String>,
        updated_at: Timestamp,
    ) -> Self {
        Self {
            id,
            category_id,
            title: title.into(),
            content: content.into(),
            updated_at,
        }
    }

    pub fn id(&self) -> NoteId {
        self.id
    }

    pub fn category_id(&self) -> CategoryId {
        self.category_id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the stored content. A note that was never written has empty content.
    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn updated_at(&self) -> Timestamp {
        self.updated_at
    }

    /// Returns how the content should be rendered.
    pub fn format(&self) -> ContentFormat {
        ContentFormat::detect(&self.content)
    }
}

/// The listing view of a note.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteSummary {
    id: NoteId,
    title: String,
}

impl NoteSummary {
    pub fn new(id: NoteId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
        }
    }

    pub fn id(&self) -> NoteId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }
}

// ===========================================
// Partial Updates
// ===========================================

/// A field in an update request: either left alone or set to a value.
///
/// Distinguishes "set to empty" (`Set(String::new())`) from "leave unchanged" (`Keep`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Field<T> {
    Keep,
    Set(T),
}

impl<T> Field<T> {
    pub fn is_set(&self) -> bool {
        matches!(self, Self::Set(_))
    }
}

impl<T> Default for Field<T> {
    fn default() -> Self {
        Self::Keep
    }
}

impl<T> From<Option<T>> for Field<T> {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Keep, Self::Set)
    }
}

/// A request to change some fields of a note.
///
/// # Examples
///
/// ```
/// use glacier::domain::{NoteTitle, NoteUpdate};
///
/// let update = NoteUpdate::new().content("<html>...</html>");
/// assert!(!update.is_empty());
/// assert!(!update.title.is_set());
///
/// assert!(NoteUpdate::new().is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteUpdate {
    pub title: Field<NoteTitle>,
    pub content: Field<String>,
}

impl NoteUpdate {
    /// Creates an update that changes nothing.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the title.
    pub fn title(mut self, title: NoteTitle) -> Self {
        self.title = Field::Set(title);
        self
    }

    /// Sets the content.
    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = Field::Set(content.into());
        self
    }

    /// Returns true if no field is set.
    pub fn is_empty(&self) -> bool {
        !self.title.is_set() && !self.content.is_set()
    }
}
