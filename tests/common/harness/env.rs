//! Isolated test environment with temp directory.

// Allow dead code since this is a test utility with methods for future tests
#![allow(dead_code)]

use super::GlacierCommand;
use glacier::domain::{CategoryId, CategoryName, NoteId, NoteTitle};
use glacier::repo::{CategoryRepository, NoteRepository};
use glacier::store::Store;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Isolated test environment with its own database and config directory.
pub struct TestEnv {
    _temp_dir: TempDir,
    root: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let root = temp_dir.path().to_path_buf();
        Self {
            _temp_dir: temp_dir,
            root,
        }
    }

    /// Returns the path of the notes database.
    pub fn db_path(&self) -> PathBuf {
        self.root.join("data").join("glacier_notes.db")
    }

    /// Returns the isolated config directory.
    pub fn config_home(&self) -> PathBuf {
        self.root.join("config")
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Opens the environment's store directly.
    pub fn store(&self) -> Store {
        Store::open(&self.db_path()).expect("Failed to open store")
    }

    /// Creates a category directly through the library.
    pub fn add_category(&self, name: &str) -> CategoryId {
        let store = self.store();
        CategoryRepository::new(&store)
            .add(&CategoryName::new(name).unwrap())
            .expect("Failed to add category")
    }

    /// Creates a note directly through the library.
    pub fn add_note(&self, category: CategoryId, title: &str, content: &str) -> NoteId {
        let store = self.store();
        NoteRepository::new(&store)
            .add_with_content(category, &NoteTitle::new(title).unwrap(), content)
            .expect("Failed to add note")
    }

    /// Writes a file to the test environment and returns its path.
    pub fn write_file(&self, name: &str, content: &str) -> PathBuf {
        let path = self.root.join(name);
        std::fs::write(&path, content).expect("Failed to write file");
        path
    }

    /// Creates a command configured for this test environment.
    pub fn cmd(&self) -> GlacierCommand {
        GlacierCommand::new()
            .config_home(&self.config_home())
            .db(&self.db_path())
    }

    /// Creates a command that relies on the config file for the database path.
    pub fn cmd_without_db(&self) -> GlacierCommand {
        GlacierCommand::new().config_home(&self.config_home())
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}
