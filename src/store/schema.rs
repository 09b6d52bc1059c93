//! SQLite schema creation for the notes store.

use rusqlite::Connection;

/// Current schema version recorded in `schema_version`.
pub const SCHEMA_VERSION: i64 = 1;

/// Creates the database schema.
///
/// Idempotent. The two data tables match the layout of databases written by
/// earlier releases, so existing files open without migration.
///
/// # Tables Created
/// - `categories` - Named groupings, unique by name
/// - `notes` - Titled content owned by a category (cascade on delete)
/// - `schema_version` - Schema version tracking
pub fn create_schema(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch("PRAGMA foreign_keys = ON;")?;

    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS categories (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT UNIQUE NOT NULL
        );",
    )?;

    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS notes (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            category_id INTEGER NOT NULL,
            title TEXT NOT NULL,
            content TEXT,
            updated_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP,
            FOREIGN KEY (category_id) REFERENCES categories(id) ON DELETE CASCADE
        );",
    )?;

    conn.execute_batch(
        "CREATE INDEX IF NOT EXISTS idx_notes_category_updated
            ON notes(category_id, updated_at);",
    )?;

    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS schema_version (
            version INTEGER PRIMARY KEY,
            applied_at TEXT NOT NULL
        );",
    )?;

    conn.execute(
        "INSERT OR IGNORE INTO schema_version (version, applied_at) VALUES (?1, datetime('now'))",
        [SCHEMA_VERSION],
    )?;

    Ok(())
}

/// Returns the current schema version.
pub fn get_schema_version(conn: &Connection) -> rusqlite::Result<i64> {
    conn.query_row("SELECT MAX(version) FROM schema_version", [], |row| {
        row.get(0)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    // ===========================================
    // Test Helpers
    // ===========================================

    fn test_connection() -> Connection {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch("PRAGMA foreign_keys = ON;").unwrap();
        conn
    }

    fn table_exists(conn: &Connection, name: &str) -> bool {
        conn.query_row(
            "SELECT 1 FROM sqlite_master WHERE type='table' AND name=?",
            [name],
            |_| Ok(()),
        )
        .is_ok()
    }

    fn get_columns(conn: &Connection, table: &str) -> Vec<(String, bool)> {
        let mut stmt = conn
            .prepare(&format!("PRAGMA table_info({})", table))
            .unwrap();
        stmt.query_map([], |row| {
            Ok((
                row.get::<_, String>(1)?,   // name
                row.get::<_, i32>(3)? != 0, // notnull
            ))
        })
        .unwrap()
        .filter_map(|r| r.ok())
        .collect()
    }

    // ===========================================
    // Tables
    // ===========================================

    #[test]
    fn creates_both_tables() {
        let conn = test_connection();
        create_schema(&conn).unwrap();
        assert!(table_exists(&conn, "categories"));
        assert!(table_exists(&conn, "notes"));
    }

    #[test]
    fn notes_columns_and_nullability() {
        let conn = test_connection();
        create_schema(&conn).unwrap();

        let columns = get_columns(&conn, "notes");
        assert_eq!(
            columns,
            vec![
                ("id".to_string(), false),
                ("category_id".to_string(), true),
                ("title".to_string(), true),
                ("content".to_string(), false),
                ("updated_at".to_string(), false),
            ]
        );
    }

    #[test]
    fn category_names_are_unique() {
        let conn = test_connection();
        create_schema(&conn).unwrap();

        conn.execute("INSERT INTO categories (name) VALUES ('Work')", [])
            .unwrap();
        let dup = conn.execute("INSERT INTO categories (name) VALUES ('Work')", []);
        assert!(dup.is_err(), "duplicate category name should be rejected");
    }

    #[test]
    fn deleting_category_cascades_to_notes() {
        let conn = test_connection();
        create_schema(&conn).unwrap();

        conn.execute("INSERT INTO categories (id, name) VALUES (1, 'Work')", [])
            .unwrap();
        conn.execute(
            "INSERT INTO notes (category_id, title) VALUES (1, 'Plan')",
            [],
        )
        .unwrap();
        conn.execute("DELETE FROM categories WHERE id = 1", [])
            .unwrap();

        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM notes", [], |row| row.get(0))
            .unwrap();
        assert_eq!(count, 0);
    }

    #[test]
    fn note_requires_existing_category() {
        let conn = test_connection();
        create_schema(&conn).unwrap();

        let orphan = conn.execute(
            "INSERT INTO notes (category_id, title) VALUES (99, 'Lost')",
            [],
        );
        assert!(orphan.is_err(), "foreign key should reject unknown category");
    }

    #[test]
    fn updated_at_defaults_to_now() {
        let conn = test_connection();
        create_schema(&conn).unwrap();

        conn.execute("INSERT INTO categories (id, name) VALUES (1, 'Work')", [])
            .unwrap();
        conn.execute(
            "INSERT INTO notes (category_id, title) VALUES (1, 'Plan')",
            [],
        )
        .unwrap();

        let updated_at: Option<String> = conn
            .query_row("SELECT updated_at FROM notes", [], |row| row.get(0))
            .unwrap();
        assert!(updated_at.is_some());
    }

    // ===========================================
    // Idempotence & Versioning
    // ===========================================

    #[test]
    fn create_schema_is_idempotent() {
        let conn = test_connection();
        create_schema(&conn).unwrap();
        create_schema(&conn).unwrap();
        assert_eq!(get_schema_version(&conn).unwrap(), SCHEMA_VERSION);
    }
}
