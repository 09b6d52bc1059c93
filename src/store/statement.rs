//! Statement execution primitives: single writes, reads and atomic batches.

use super::{Store, StoreError, StoreResult};
use rusqlite::types::Value;
use rusqlite::{Params, Row, params_from_iter};
use std::borrow::Cow;

/// When a single write becomes durable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Commit {
    /// Commit as soon as the statement succeeds, together with any pending writes.
    #[default]
    Immediate,
    /// Leave the write pending until [`Store::commit`] or the next immediate write.
    Deferred,
}

/// Outcome of a mutating statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Executed {
    /// Rowid of the most recent successful INSERT on this connection.
    pub last_insert_id: i64,
    /// Number of rows inserted, updated or deleted by the statement.
    pub rows_affected: usize,
}

/// An owned SQL statement with its bound parameters, for use in batches.
///
/// # Examples
///
/// ```
/// use glacier::store::Statement;
///
/// let stmt = Statement::new("DELETE FROM notes WHERE category_id = ?").bind(3_i64);
/// assert_eq!(stmt.params().len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Statement {
    sql: Cow<'static, str>,
    params: Vec<Value>,
}

impl Statement {
    pub fn new(sql: impl Into<Cow<'static, str>>) -> Self {
        Self {
            sql: sql.into(),
            params: Vec::new(),
        }
    }

    /// Appends a positional parameter.
    pub fn bind(mut self, value: impl Into<Value>) -> Self {
        self.params.push(value.into());
        self
    }

    pub fn sql(&self) -> &str {
        &self.sql
    }

    pub fn params(&self) -> &[Value] {
        &self.params
    }
}

impl Store {
    // ===========================================
    // Single Statements
    // ===========================================

    /// Executes one mutating statement.
    ///
    /// With [`Commit::Immediate`] the write (and any pending deferred write)
    /// is committed before returning. With [`Commit::Deferred`] a transaction
    /// is opened if none is active and the write stays pending.
    pub fn execute<P: Params>(&self, sql: &str, params: P, commit: Commit) -> StoreResult<Executed> {
        if commit == Commit::Deferred && self.conn.is_autocommit() {
            self.conn.execute_batch("BEGIN DEFERRED")?;
        }

        let rows_affected = self
            .conn
            .execute(sql, params)
            .map_err(|err| statement_failed(sql, err))?;
        let executed = Executed {
            last_insert_id: self.conn.last_insert_rowid(),
            rows_affected,
        };

        if commit == Commit::Immediate {
            self.commit()?;
        }
        Ok(executed)
    }

    /// Commits pending deferred writes. Does nothing when none are pending.
    pub fn commit(&self) -> StoreResult<()> {
        if !self.conn.is_autocommit() {
            self.conn.execute_batch("COMMIT")?;
            log::trace!("committed pending writes");
        }
        Ok(())
    }

    /// Returns true while a deferred write awaits commit.
    pub fn has_pending_writes(&self) -> bool {
        !self.conn.is_autocommit()
    }

    // ===========================================
    // Reads
    // ===========================================

    /// Runs a read and maps every row in order.
    ///
    /// Rows are addressed by column name inside `map_row`, e.g.
    /// `row.get::<_, String>("name")`.
    pub fn query<T, P, F>(&self, sql: &str, params: P, mut map_row: F) -> StoreResult<Vec<T>>
    where
        P: Params,
        F: FnMut(&Row<'_>) -> rusqlite::Result<T>,
    {
        let run = || -> rusqlite::Result<Vec<T>> {
            let mut stmt = self.conn.prepare(sql)?;
            let rows = stmt.query_map(params, &mut map_row)?;
            rows.collect()
        };
        run().map_err(|err| statement_failed(sql, err))
    }

    // ===========================================
    // Atomic Batches
    // ===========================================

    /// Executes statements as one all-or-nothing batch.
    ///
    /// Pending deferred writes are committed first. If any statement fails,
    /// every statement of the batch is rolled back and the failure is
    /// returned as [`StoreError::Transaction`].
    pub fn execute_transaction(&self, statements: &[Statement]) -> StoreResult<Vec<Executed>> {
        self.commit()?;
        let tx = self.transaction()?;

        let mut results = Vec::with_capacity(statements.len());
        for (index, statement) in statements.iter().enumerate() {
            match tx.execute(statement.sql(), params_from_iter(statement.params())) {
                Ok(rows_affected) => results.push(Executed {
                    last_insert_id: tx.last_insert_rowid(),
                    rows_affected,
                }),
                Err(source) => {
                    log::error!(
                        "transaction rolled back at statement {} ({}): {}",
                        index,
                        statement.sql(),
                        source
                    );
                    if let Err(rollback_err) = tx.rollback() {
                        log::error!("rollback failed: {}", rollback_err);
                    }
                    return Err(StoreError::Transaction {
                        index,
                        source: Box::new(source),
                    });
                }
            }
        }

        tx.commit()?;
        Ok(results)
    }
}

fn statement_failed(sql: &str, err: rusqlite::Error) -> StoreError {
    log::warn!("statement failed: {} ({})", err, sql.trim());
    StoreError::from(err)
}
