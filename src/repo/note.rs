//! Note repository.

use super::CategoryRepository;
use crate::domain::{Category, CategoryId, Field, Note, NoteId, NoteSummary, NoteTitle, NoteUpdate};
use crate::store::{Commit, Store, StoreError, StoreResult};
use rusqlite::params_from_iter;
use rusqlite::types::Value;

/// CRUD over notes.
pub struct NoteRepository<'a> {
    store: &'a Store,
}

impl<'a> NoteRepository<'a> {
    pub fn new(store: &'a Store) -> Self {
        Self { store }
    }

    // ===========================================
    // Reads
    // ===========================================

    /// Lists the notes of a category, most recently updated first.
    ///
    /// # Errors
    ///
    /// Returns `CategoryNotFound` if the category does not exist.
    pub fn list_by_category(&self, category_id: CategoryId) -> StoreResult<Vec<NoteSummary>> {
        self.require_category(category_id)?;
        self.store.query(
            "SELECT id, title FROM notes
             WHERE category_id = ?
             ORDER BY updated_at DESC, id DESC",
            [category_id],
            |row| {
                Ok(NoteSummary::new(
                    row.get("id")?,
                    row.get::<_, String>("title")?,
                ))
            },
        )
    }

    /// Loads a note with its content.
    pub fn get_by_id(&self, id: NoteId) -> StoreResult<Note> {
        self.store
            .query(
                "SELECT id, category_id, title, content, updated_at FROM notes WHERE id = ?",
                [id],
                |row| {
                    Ok(Note::new(
                        row.get("id")?,
                        row.get("category_id")?,
                        row.get::<_, String>("title")?,
                        row.get::<_, Option<String>>("content")?.unwrap_or_default(),
                        row.get("updated_at")?,
                    ))
                },
            )?
            .into_iter()
            .next()
            .ok_or(StoreError::NoteNotFound { id })
    }

    /// Returns every category together with its notes, categories by name.
    pub fn outline(&self) -> StoreResult<Vec<(Category, Vec<NoteSummary>)>> {
        let categories = CategoryRepository::new(self.store).list_all()?;
        let mut outline = Vec::with_capacity(categories.len());
        for category in categories {
            let notes = self.list_by_category(category.id())?;
            outline.push((category, notes));
        }
        Ok(outline)
    }

    // ===========================================
    // Writes
    // ===========================================

    /// Creates an empty note in a category.
    pub fn add(&self, category_id: CategoryId, title: &NoteTitle) -> StoreResult<NoteId> {
        self.add_with_content(category_id, title, "")
    }

    /// Creates a note with initial content.
    ///
    /// # Errors
    ///
    /// Returns `CategoryNotFound` if the category does not exist.
    pub fn add_with_content(
        &self,
        category_id: CategoryId,
        title: &NoteTitle,
        content: &str,
    ) -> StoreResult<NoteId> {
        self.require_category(category_id)?;
        let executed = self.store.execute(
            "INSERT INTO notes (category_id, title, content, updated_at) VALUES (?, ?, ?, ?)",
            rusqlite::params![category_id, title.as_str(), content, self.store.now()],
            Commit::Immediate,
        )?;
        let id = NoteId::new(executed.last_insert_id);
        log::debug!("added note {} to category {}", id, category_id);
        Ok(id)
    }

    /// Deletes a note.
    pub fn delete(&self, id: NoteId) -> StoreResult<()> {
        let executed = self.store.execute(
            "DELETE FROM notes WHERE id = ?",
            [id],
            Commit::Immediate,
        )?;
        if executed.rows_affected == 0 {
            return Err(StoreError::NoteNotFound { id });
        }
        log::debug!("deleted note {}", id);
        Ok(())
    }

    /// Applies a partial update.
    ///
    /// Only fields set in `update` are written, and `updated_at` is refreshed
    /// (never moved backwards) whenever anything is written. An empty update
    /// executes nothing.
    ///
    /// # Errors
    ///
    /// Returns `NoteNotFound` if the note does not exist and the update is not empty.
    pub fn update(&self, id: NoteId, update: &NoteUpdate) -> StoreResult<()> {
        if update.is_empty() {
            log::trace!("empty update for note {}, nothing to write", id);
            return Ok(());
        }

        let mut assignments = Vec::new();
        let mut params: Vec<Value> = Vec::new();

        if let Field::Set(title) = &update.title {
            assignments.push("title = ?");
            params.push(Value::Text(title.as_str().to_string()));
        }
        if let Field::Set(content) = &update.content {
            assignments.push("content = ?");
            params.push(Value::Text(content.clone()));
        }

        assignments.push("updated_at = MAX(COALESCE(updated_at, ''), ?)");
        params.push(self.store.now().into());
        params.push(id.into());

        let sql = format!("UPDATE notes SET {} WHERE id = ?", assignments.join(", "));
        let executed = self
            .store
            .execute(&sql, params_from_iter(params), Commit::Immediate)?;
        if executed.rows_affected == 0 {
            return Err(StoreError::NoteNotFound { id });
        }
        log::debug!("updated note {}", id);
        Ok(())
    }

    fn require_category(&self, id: CategoryId) -> StoreResult<()> {
        if CategoryRepository::new(self.store).exists(id)? {
            Ok(())
        } else {
            Err(StoreError::CategoryNotFound { id })
        }
    }
}
