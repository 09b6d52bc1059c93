//! Storage error type.

use crate::domain::{CategoryId, NoteId};
use rusqlite::ErrorCode;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The database file could not be opened.
    #[error("storage unavailable at {path}: {source}")]
    Unavailable {
        path: PathBuf,
        #[source]
        source: rusqlite::Error,
    },

    /// An I/O error occurred while preparing the database location.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A UNIQUE, NOT NULL or foreign-key constraint rejected the write.
    #[error("constraint violation: {message}")]
    Constraint {
        message: String,
        #[source]
        source: rusqlite::Error,
    },

    /// The requested category does not exist.
    #[error("category not found: {id}")]
    CategoryNotFound { id: CategoryId },

    /// The requested note does not exist.
    #[error("note not found: {id}")]
    NoteNotFound { id: NoteId },

    /// A statement in a batch failed and the whole batch was rolled back.
    #[error("transaction rolled back at statement {index}: {source}")]
    Transaction {
        index: usize,
        #[source]
        source: Box<StoreError>,
    },

    /// A stored value could not be decoded.
    #[error("invalid stored value: {0}")]
    InvalidData(String),

    /// Any other database error.
    #[error("database error: {0}")]
    Database(#[source] rusqlite::Error),
}

impl StoreError {
    /// Returns true for constraint violations, including inside a failed batch.
    pub fn is_constraint(&self) -> bool {
        match self {
            Self::Constraint { .. } => true,
            Self::Transaction { source, .. } => source.is_constraint(),
            _ => false,
        }
    }

    /// Returns true when a referenced category or note does not exist.
    pub fn is_not_found(&self) -> bool {
        match self {
            Self::CategoryNotFound { .. } | Self::NoteNotFound { .. } => true,
            Self::Transaction { source, .. } => source.is_not_found(),
            _ => false,
        }
    }
}

impl From<rusqlite::Error> for StoreError {
    fn from(err: rusqlite::Error) -> Self {
        if let rusqlite::Error::FromSqlConversionFailure(column, _, source) = &err {
            return Self::InvalidData(format!("column {}: {}", column, source));
        }

        let constraint = match &err {
            rusqlite::Error::SqliteFailure(failure, message)
                if failure.code == ErrorCode::ConstraintViolation =>
            {
                Some(message.clone().unwrap_or_else(|| failure.to_string()))
            }
            _ => None,
        };

        match constraint {
            Some(message) => Self::Constraint {
                message,
                source: err,
            },
            None => Self::Database(err),
        }
    }
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
