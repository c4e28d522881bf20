//! Tweet repository.
//!
//! Append and read back rows of the `tweet` table.

use crate::database::Database;
use crate::error::Result;
use crate::schema;
use std::sync::Arc;

/// Repository for the `tweet` table.
#[derive(Debug, Clone)]
pub struct TweetRepository {
    db: Arc<Database>,
}

impl TweetRepository {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    pub fn db(&self) -> Arc<Database> {
        self.db.clone()
    }

    /// Insert one text.
    pub fn insert(&self, text: &str) -> Result<()> {
        let conn = self.db.open()?;
        conn.execute(schema::INSERT_TWEET, [text])?;
        Ok(())
    }

    /// Insert many texts in one transaction.
    ///
    /// The table is created even when there is nothing to insert.
    pub fn insert_batch(&self, texts: &[String]) -> Result<usize> {
        let mut conn = self.db.open()?;
        if texts.is_empty() {
            return Ok(0);
        }

        let tx = conn.transaction()?;
        {
            let mut stmt = tx.prepare(schema::INSERT_TWEET)?;
            for text in texts {
                stmt.execute([text])?;
            }
        }
        tx.commit()?;

        tracing::debug!(rows = texts.len(), path = %self.db.path().display(), "Appended tweets");
        Ok(texts.len())
    }

    /// Count rows.
    pub fn count(&self) -> Result<u64> {
        let conn = self.db.open()?;
        let count: i64 = conn.query_row("SELECT COUNT(*) FROM tweet", [], |row| row.get(0))?;
        Ok(count.max(0) as u64)
    }

    /// All stored texts in insertion order.
    pub fn list(&self) -> Result<Vec<String>> {
        let conn = self.db.open()?;
        let mut stmt = conn.prepare("SELECT text FROM tweet ORDER BY rowid")?;
        let rows = stmt
            .query_map([], |row| row.get::<_, String>(0))?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(rows)
    }
}
