//! SQLite-backed storage engine.
//!
//! Owns the single connection for the lifetime of the application and
//! exposes three primitives to the repositories: [`Store::execute`],
//! [`Store::query`] and [`Store::execute_transaction`].

mod clock;
mod codec;
mod connection;
mod error;
mod schema;
mod statement;
mod transaction;


use rusqlite::Connection;
use std::path::PathBuf;

pub use clock::{Clock, SteppingClock, SystemClock};
pub use error::{StoreError, StoreResult};
pub use schema::{SCHEMA_VERSION, create_schema, get_schema_version};
pub use statement::{Commit, Executed, Statement};
pub use transaction::Transaction;

// ===========================================
// Store Struct
// ===========================================

/// Handle to the backing store.
///
/// Constructed once at startup and passed by reference to every repository.
pub struct Store {
    pub(crate) conn: Connection,
    clock: Box<dyn Clock>,
    path: Option<PathBuf>,
}
