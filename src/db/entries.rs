//! Journal entry persistence.
//!
//! Rows are append-only: the program never updates or deletes an entry
//! once written.

use crate::errors::{AppResult, DatabaseError};
use rusqlite::{params, Connection};
use tracing::debug;

/// A journal entry as stored in the database.
#[derive(Debug, Clone)]
pub struct JournalEntry {
    pub id: i64,
    pub entry: String,
    pub reflection: String,
    /// Assigned by the storage engine at insert time, as SQLite formats it.
    pub timestamp: String,
}

/// Inserts a journal entry with its reflection.
///
/// The entry text is stored exactly as given, with no trimming or
/// transformation. The timestamp column is populated by the storage
/// engine's default. Returns the assigned row id.
///
/// # Errors
///
/// Returns an error if the database operation fails.
pub fn insert_entry(conn: &Connection, entry: &str, reflection: &str) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO entries (entry, reflection) VALUES (?1, ?2)",
        params![entry, reflection],
    )
    .map_err(DatabaseError::Sqlite)?;

    let id = conn.last_insert_rowid();
    debug!("Saved journal entry with id {}", id);
    Ok(id)
}

/// Retrieves an entry by id.
///
/// Returns `Ok(None)` if no entry exists with the given id.
///
/// # Errors
///
/// Returns an error if the database operation fails.
pub fn get_entry(conn: &Connection, id: i64) -> AppResult<Option<JournalEntry>> {
    let result = conn.query_row(
        "SELECT id, entry, reflection, timestamp FROM entries WHERE id = ?1",
        params![id],
        |row| {
            Ok(JournalEntry {
                id: row.get(0)?,
                entry: row.get(1)?,
                reflection: row.get(2)?,
                timestamp: row.get(3)?,
            })
        },
    );

    match result {
        Ok(entry) => Ok(Some(entry)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(DatabaseError::Sqlite(e).into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup_test_db() -> Connection {
        let conn = Connection::open_in_memory().unwrap();
        crate::db::schema::create_tables(&conn).unwrap();
        conn
    }

    #[test]
    fn test_insert_entry_returns_id() {
        let conn = setup_test_db();

        let id = insert_entry(&conn, "first day", "a reflection").unwrap();
        assert_eq!(id, 1);

        let id = insert_entry(&conn, "second day", "another reflection").unwrap();
        assert_eq!(id, 2);
    }

    #[test]
    fn test_entry_text_stored_verbatim() {
        let conn = setup_test_db();

        // Leading/trailing whitespace and unicode must survive untouched
        let entry = "  Had a hard day at work. \t émotions 🙂 ";
        let id = insert_entry(&conn, entry, "stay strong").unwrap();

        let stored = get_entry(&conn, id).unwrap().unwrap();
        assert_eq!(stored.entry, entry);
        assert_eq!(stored.reflection, "stay strong");
    }

    #[test]
    fn test_empty_entry_is_accepted() {
        let conn = setup_test_db();

        let id = insert_entry(&conn, "", "a reflection on nothing").unwrap();
        let stored = get_entry(&conn, id).unwrap().unwrap();
        assert_eq!(stored.entry, "");
    }

    #[test]
    fn test_timestamp_assigned_on_insert() {
        let conn = setup_test_db();

        let id = insert_entry(&conn, "entry", "reflection").unwrap();
        let stored = get_entry(&conn, id).unwrap().unwrap();

        assert!(!stored.timestamp.is_empty());
        // CURRENT_TIMESTAMP produces "YYYY-MM-DD HH:MM:SS"
        assert!(stored.timestamp.contains('-'));
        assert!(stored.timestamp.contains(':'));
    }

    #[test]
    fn test_error_text_stored_like_any_reflection() {
        let conn = setup_test_db();

        let reflection = "Error generating reflection: connection refused";
        let id = insert_entry(&conn, "entry", reflection).unwrap();

        let stored = get_entry(&conn, id).unwrap().unwrap();
        assert_eq!(stored.reflection, reflection);
    }

    #[test]
    fn test_get_entry_not_found() {
        let conn = setup_test_db();
        let result = get_entry(&conn, 999).unwrap();
        assert!(result.is_none());
    }
}
