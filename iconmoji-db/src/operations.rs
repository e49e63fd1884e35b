//! Bulk loading of matched records.

use iconmoji_core::MatchedRecord;
use rusqlite::{Connection, params};
use thiserror::Error;

use crate::progress::LoadProgress;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
    #[error("Failed to insert '{file_name}': {source}")]
    Insert {
        file_name: String,
        #[source]
        source: rusqlite::Error,
    },
}

/// Insert every record, in order, inside a single transaction.
///
/// Either all rows land or, on the first failure, none do.
pub fn load_all(
    conn: &Connection,
    records: &[MatchedRecord],
    progress: Option<&dyn LoadProgress>,
) -> Result<usize, LoadError> {
    let total = records.len();
    let tx = conn.unchecked_transaction()?;

    {
        let mut stmt = tx.prepare(
            "INSERT INTO emojis (file_name, emoji, emoji_version, description)
             VALUES (?1, ?2, ?3, ?4)",
        )?;

        for (i, record) in records.iter().enumerate() {
            stmt.execute(params![
                record.file_name,
                record.emoji,
                record.emoji_version,
                record.description,
            ])
            .map_err(|source| LoadError::Insert {
                file_name: record.file_name.clone(),
                source,
            })?;

            if let Some(p) = progress {
                p.on_record(i + 1, total, &record.file_name);
            }
        }
    }

    tx.commit()?;

    if let Some(p) = progress {
        p.on_complete(total);
    }

    Ok(total)
}

/// Number of rows in the emoji table.
pub fn count_rows(conn: &Connection) -> Result<i64, LoadError> {
    let count = conn.query_row("SELECT COUNT(*) FROM emojis", [], |row| row.get(0))?;
    Ok(count)
}
