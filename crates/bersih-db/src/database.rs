//! Database file handle.
//!
//! Connections are short-lived: each write opens the file, makes sure the
//! table exists, does its work and drops the connection.

use crate::error::Result;
use crate::schema;
use rusqlite::Connection;
use std::path::{Path, PathBuf};

/// Location of the SQLite file.
#[derive(Debug, Clone)]
pub struct Database {
    path: PathBuf,
}

impl Database {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self { path: path.as_ref().to_path_buf() }
    }

    /// Get the database path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Open a fresh connection, creating the parent directory and the
    /// `tweet` table if they don't exist yet.
    pub fn open(&self) -> Result<Connection> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                std::fs::create_dir_all(parent)?;
                tracing::info!(dir = %parent.display(), "Created database directory");
            }
        }

        let conn = Connection::open(&self.path)?;
        conn.execute(schema::CREATE_TWEET_TABLE, [])?;
        Ok(conn)
    }

    /// Check if a table exists.
    pub fn table_exists(&self, name: &str) -> Result<bool> {
        let conn = self.open()?;
        let count: i64 = conn.query_row(
            "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = ?1",
            [name],
            |row| row.get(0),
        )?;
        Ok(count > 0)
    }
}
