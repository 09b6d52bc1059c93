//! Command handlers for the CLI.
//!
//! Handlers talk to the store only through the repositories.

mod category;
mod note;
mod tree;


use anyhow::{Context, Result, bail};

use super::ContentArgs;
use crate::domain::{Category, NoteId};
use crate::repo::CategoryRepository;

pub use category::handle_category;
pub use note::handle_note;
pub use tree::handle_tree;

// ===========================================
// Shared Utilities
// ===========================================

/// Resolves a category given by exact name or by numeric ID.
///
/// Names win over IDs, so a category literally named "7" is still reachable.
pub(crate) fn resolve_category(
    categories: &CategoryRepository<'_>,
    identifier: &str,
) -> Result<Category> {
    if let Some(category) = categories
        .find_by_name(identifier.trim())
        .context("failed to look up category")?
    {
        return Ok(category);
    }

    if let Ok(id) = identifier.parse() {
        match categories.get(id) {
            Ok(category) => return Ok(category),
            Err(e) if e.is_not_found() => {}
            Err(e) => return Err(e).context("failed to look up category"),
        }
    }

    bail!("category not found: {}", identifier)
}

/// Parses a note ID argument.
pub(crate) fn parse_note_id(identifier: &str) -> Result<NoteId> {
    identifier
        .parse()
        .with_context(|| format!("invalid note id: {}", identifier))
}

/// Reads the content given inline or from a file, if any.
pub(crate) fn read_content(args: &ContentArgs) -> Result<Option<String>> {
    if let Some(content) = &args.content {
        return Ok(Some(content.clone()));
    }
    match &args.content_file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read content file: {}", path.display()))
            .map(Some),
        None => Ok(None),
    }
}

/// Truncates a string to a maximum display width, adding ellipsis if needed.
pub(crate) fn truncate_str(s: &str, max_width: usize) -> String {
    if s.chars().count() <= max_width {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max_width.saturating_sub(1)).collect();
        format!("{}…", truncated)
    }
}
