//! Database operations for journal entries.
//!
//! This module provides SQLite storage for journal entries and their
//! reflections. Every operation opens its own connection and drops it on
//! return: the database handle is never shared across operations, so each
//! call is isolated from the last.
//!
//! # Module Structure
//!
//! - `schema`: Table definition and idempotent initialization
//! - `entries`: Entry insert and lookup
//!
//! # Example
//!
//! ```no_run
//! use solace::db::Storage;
//!
//! let storage = Storage::new("journal.db");
//! storage.initialize()?;
//! let id = storage.save_entry("Had a good day.", "Keep noticing the good days.")?;
//! # Ok::<(), solace::errors::AppError>(())
//! ```

pub mod entries;
pub mod schema;

use crate::errors::{AppResult, DatabaseError};
use rusqlite::Connection;
use std::fs;
use std::path::PathBuf;
use tracing::{debug, info};

/// Handle to the journal database.
///
/// Holds only the file path. Connections are opened per operation and
/// closed when the operation returns, on every exit path.
pub struct Storage {
    path: PathBuf,
}

impl Storage {
    /// Creates a storage handle for the given database path.
    ///
    /// No file is touched until [`Storage::initialize`] or an operation runs.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Storage { path: path.into() }
    }

    /// Opens a fresh connection to the database file.
    ///
    /// Missing parent directories are created first so a configured path
    /// like `~/journals/solace.db` works on first run.
    fn connect(&self) -> AppResult<Connection> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let conn = Connection::open(&self.path).map_err(DatabaseError::Sqlite)?;
        Ok(conn)
    }

    /// Opens (creating if absent) the database file and ensures the entries
    /// table exists.
    ///
    /// Idempotent - safe to call on every run. Existing rows are unchanged.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened or created, or if the
    /// schema statement fails. Callers treat this as fatal.
    pub fn initialize(&self) -> AppResult<()> {
        debug!("Initializing database at {:?}", self.path);
        let conn = self.connect()?;
        schema::create_tables(&conn)?;
        info!("Database initialized");
        Ok(())
    }

    /// Appends a journal entry with its reflection and returns the row id.
    ///
    /// The timestamp is assigned by the storage engine at insert time.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    pub fn save_entry(&self, entry: &str, reflection: &str) -> AppResult<i64> {
        let conn = self.connect()?;
        entries::insert_entry(&conn, entry, reflection)
    }
}
