//! Output format types for CLI commands.

use clap::ValueEnum;
use serde::Serialize;

use crate::domain::{Category, ContentFormat, Note, NoteSummary};

/// Output format for command results.
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output for programmatic consumption
    Json,
}

/// Wrapper for serializable command output.
#[derive(Debug, Serialize)]
pub struct Output<T: Serialize> {
    pub data: T,
}

impl<T: Serialize> Output<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

/// A single category in listing output.
#[derive(Debug, Serialize)]
pub struct CategoryListing {
    pub id: i64,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<Vec<NoteListing>>,
}

impl From<&Category> for CategoryListing {
    fn from(category: &Category) -> Self {
        Self {
            id: category.id().get(),
            name: category.name().to_string(),
            notes: None,
        }
    }
}

/// A single note in listing output.
#[derive(Debug, Serialize)]
pub struct NoteListing {
    pub id: i64,
    pub title: String,
}

impl From<&NoteSummary> for NoteListing {
    fn from(note: &NoteSummary) -> Self {
        Self {
            id: note.id().get(),
            title: note.title().to_string(),
        }
    }
}

/// A fully loaded note.
#[derive(Debug, Serialize)]
pub struct NoteDetail {
    pub id: i64,
    pub category_id: i64,
    pub title: String,
    pub format: ContentFormat,
    pub content: String,
    pub updated_at: String,
}

impl From<&Note> for NoteDetail {
    fn from(note: &Note) -> Self {
        Self {
            id: note.id().get(),
            category_id: note.category_id().get(),
            title: note.title().to_string(),
            format: note.format(),
            content: note.content().to_string(),
            updated_at: note.updated_at().to_storage_string(),
        }
    }
}

/// Prints a value as pretty JSON wrapped in `{"data": ...}`.
pub fn print_json<T: Serialize>(data: T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(&Output::new(data))?);
    Ok(())
}
