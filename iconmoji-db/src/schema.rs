//! SQLite schema creation.

use rusqlite::Connection;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
}

/// Name of the single output table.
pub const TABLE_NAME: &str = "emojis";

/// Create the emoji table.
///
/// The table is an FTS4 virtual table tokenized with `unicode61`, so
/// downstream consumers can run word queries over descriptions and glyphs.
/// FTS ignores column constraints, so `file_name` uniqueness is guaranteed
/// by the loader's input rather than by SQLite.
pub fn create_schema(conn: &Connection) -> Result<(), SchemaError> {
    conn.execute_batch(SCHEMA_SQL)?;
    Ok(())
}

/// Create a new database file at `path` with the schema in place.
pub fn open_database(path: &std::path::Path) -> Result<Connection, SchemaError> {
    let conn = Connection::open(path)?;
    create_schema(&conn)?;
    Ok(conn)
}

/// Open an in-memory database with the full schema. Useful for testing.
pub fn open_memory() -> Result<Connection, SchemaError> {
    let conn = Connection::open_in_memory()?;
    create_schema(&conn)?;
    Ok(conn)
}

const SCHEMA_SQL: &str = r#"
CREATE VIRTUAL TABLE IF NOT EXISTS emojis USING fts4(
    file_name PRIMARY KEY,
    emoji,
    emoji_version,
    description,
    tokenize=unicode61
);
"#;
