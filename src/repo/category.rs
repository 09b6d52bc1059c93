//! Category repository.

use crate::domain::{Category, CategoryId, CategoryName};
use crate::store::{Commit, Statement, Store, StoreError, StoreResult};
use rusqlite::Row;

/// CRUD over categories.
pub struct CategoryRepository<'a> {
    store: &'a Store,
}

impl<'a> CategoryRepository<'a> {
    pub fn new(store: &'a Store) -> Self {
        Self { store }
    }

    /// Returns all categories sorted by name.
    pub fn list_all(&self) -> StoreResult<Vec<Category>> {
        self.store.query(
            "SELECT id, name FROM categories ORDER BY name ASC",
            [],
            category_from_row,
        )
    }

    /// Returns the category with the given id.
    pub fn get(&self, id: CategoryId) -> StoreResult<Category> {
        self.store
            .query(
                "SELECT id, name FROM categories WHERE id = ?",
                [id],
                category_from_row,
            )?
            .into_iter()
            .next()
            .ok_or(StoreError::CategoryNotFound { id })
    }

    /// Looks up a category by its exact name.
    pub fn find_by_name(&self, name: &str) -> StoreResult<Option<Category>> {
        Ok(self
            .store
            .query(
                "SELECT id, name FROM categories WHERE name = ?",
                [name],
                category_from_row,
            )?
            .into_iter()
            .next())
    }

    pub fn exists(&self, id: CategoryId) -> StoreResult<bool> {
        let found = self
            .store
            .query("SELECT 1 FROM categories WHERE id = ?", [id], |_| Ok(()))?;
        Ok(!found.is_empty())
    }

    /// Creates a category.
    ///
    /// # Errors
    ///
    /// Returns a constraint error if the name is already taken.
    pub fn add(&self, name: &CategoryName) -> StoreResult<CategoryId> {
        let executed = self.store.execute(
            "INSERT INTO categories (name) VALUES (?)",
            [name.as_str()],
            Commit::Immediate,
        )?;
        let id = CategoryId::new(executed.last_insert_id);
        log::debug!("added category {} ({})", id, name);
        Ok(id)
    }

    /// Renames a category in place.
    ///
    /// # Errors
    ///
    /// Returns `CategoryNotFound` if `id` does not exist, or a constraint
    /// error if another category already has `new_name`.
    pub fn rename(&self, id: CategoryId, new_name: &CategoryName) -> StoreResult<()> {
        let executed = self.store.execute(
            "UPDATE categories SET name = ? WHERE id = ?",
            rusqlite::params![new_name.as_str(), id],
            Commit::Immediate,
        )?;
        if executed.rows_affected == 0 {
            return Err(StoreError::CategoryNotFound { id });
        }
        log::debug!("renamed category {} to {}", id, new_name);
        Ok(())
    }

    /// Deletes a category and every note it owns. Returns the number of notes removed.
    ///
    /// Notes are deleted explicitly before the category inside one batch, so
    /// the result is the same whether or not the database enforced the
    /// foreign-key cascade when the notes were written.
    pub fn delete(&self, id: CategoryId) -> StoreResult<usize> {
        if !self.exists(id)? {
            return Err(StoreError::CategoryNotFound { id });
        }

        let executed = self.store.execute_transaction(&[
            Statement::new("DELETE FROM notes WHERE category_id = ?").bind(id),
            Statement::new("DELETE FROM categories WHERE id = ?").bind(id),
        ])?;
        let notes_removed = executed.first().map_or(0, |e| e.rows_affected);
        log::debug!("deleted category {} with {} note(s)", id, notes_removed);
        Ok(notes_removed)
    }
}

fn category_from_row(row: &Row<'_>) -> rusqlite::Result<Category> {
    Ok(Category::new(
        row.get("id")?,
        row.get::<_, String>("name")?,
    ))
}
