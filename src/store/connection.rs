//! Connection management for Store.

use super::schema::{create_schema, get_schema_version};
use super::transaction::Transaction;
use super::{Clock, Store, StoreError, StoreResult, SystemClock};
use crate::domain::Timestamp;
use rusqlite::Connection;
use std::fs;
use std::path::{Path, PathBuf};

impl Store {
    // ===========================================
    // In-Memory Connection
    // ===========================================

    /// Opens an in-memory database with the notes schema.
    ///
    /// Nothing is persisted; useful for tests and throwaway sessions.
    pub fn open_in_memory() -> StoreResult<Self> {
        let path = PathBuf::from(":memory:");
        let conn = Connection::open_in_memory().map_err(|source| unavailable(&path, source))?;
        create_schema(&conn).map_err(|source| unavailable(&path, source))?;
        log::debug!("opened in-memory store");
        Ok(Self::from_connection(conn, None))
    }

    // ===========================================
    // File-Based Connection
    // ===========================================

    /// Opens or creates the database at the given path.
    ///
    /// Creates parent directories if they don't exist, enables foreign keys
    /// and initializes the schema. Fails fast if the file cannot be opened
    /// or is not a database.
    pub fn open(path: &Path) -> StoreResult<Self> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            fs::create_dir_all(parent).map_err(|e| StoreError::Io {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let conn = Connection::open(path).map_err(|source| unavailable(path, source))?;
        create_schema(&conn).map_err(|source| unavailable(path, source))?;
        log::debug!("opened store at {}", path.display());
        Ok(Self::from_connection(conn, Some(path.to_path_buf())))
    }

    fn from_connection(conn: Connection, path: Option<PathBuf>) -> Self {
        Self {
            conn,
            clock: Box::new(SystemClock),
            path,
        }
    }

    /// Replaces the time source used for `updated_at` stamps.
    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    /// Closes the connection, reporting any error SQLite raises on close.
    ///
    /// Uncommitted deferred writes are discarded.
    pub fn close(self) -> StoreResult<()> {
        let path = self.path.clone();
        self.conn.close().map_err(|(_, err)| StoreError::from(err))?;
        match path {
            Some(path) => log::debug!("closed store at {}", path.display()),
            None => log::debug!("closed in-memory store"),
        }
        Ok(())
    }

    // ===========================================
    // Accessors
    // ===========================================

    /// Returns the database file path, or `None` for an in-memory store.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Returns the schema version recorded in the database.
    pub fn schema_version(&self) -> StoreResult<i64> {
        Ok(get_schema_version(&self.conn)?)
    }

    /// Reads the current time from the store's clock.
    pub(crate) fn now(&self) -> Timestamp {
        Timestamp::new(self.clock.now())
    }

    // ===========================================
    // Transaction Support
    // ===========================================

    /// Begins a new transaction.
    ///
    /// The transaction will automatically rollback on drop unless `commit()` is called.
    pub fn transaction(&self) -> StoreResult<Transaction<'_>> {
        self.conn.execute_batch("BEGIN IMMEDIATE")?;
        Ok(Transaction::new(&self.conn))
    }
}

fn unavailable(path: &Path, source: rusqlite::Error) -> StoreError {
    log::error!("cannot open store at {}: {}", path.display(), source);
    StoreError::Unavailable {
        path: path.to_path_buf(),
        source,
    }
}
