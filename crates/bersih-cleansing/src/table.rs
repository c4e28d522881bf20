//! Tabular batch input.
//!
//! Uploads arrive as comma-separated bytes in latin-1. The first row names
//! the columns; the cleansing pipeline only reads the `Tweet` column but row
//! equality for deduplication spans every column.

use std::collections::HashSet;

use bersih_common::{BersihError, Result};

/// Column holding the text to cleanse.
pub const TWEET_COLUMN: &str = "Tweet";

/// Decode latin-1 bytes. Every byte maps to the code point of the same value,
/// so decoding never fails.
pub fn decode_latin1(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| char::from(b)).collect()
}

/// An in-memory table of string cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TweetTable {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl TweetTable {
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self { headers, rows }
    }

    /// Parse a latin-1 encoded CSV upload with a header row.
    ///
    /// Records with a different number of fields than the header are
    /// rejected.
    pub fn from_csv_bytes(bytes: &[u8]) -> Result<Self> {
        let text = decode_latin1(bytes);
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(b',')
            .has_headers(true)
            .from_reader(text.as_bytes());

        let headers: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();

        let mut rows: Vec<Vec<String>> = Vec::new();
        for record in reader.records() {
            let record = record?;
            rows.push(record.iter().map(str::to_string).collect());
        }

        tracing::debug!(columns = headers.len(), rows = rows.len(), "Parsed CSV upload");
        Ok(Self { headers, rows })
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Position of the first column with this exact name.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    /// Position of a column that must exist.
    pub fn require_column(&self, name: &str) -> Result<usize> {
        self.column_index(name)
            .ok_or_else(|| BersihError::MissingColumn(name.to_string()))
    }

    /// Values of one column, in row order. Short rows yield an empty cell.
    pub fn column(&self, name: &str) -> Result<Vec<&str>> {
        let idx = self.require_column(name)?;
        Ok(self
            .rows
            .iter()
            .map(|row| row.get(idx).map(String::as_str).unwrap_or(""))
            .collect())
    }

    /// Remove rows equal to an earlier row across all columns.
    /// Keeps the first occurrence and the original order.
    pub fn drop_duplicates(self) -> Self {
        let mut seen: HashSet<Vec<String>> = HashSet::with_capacity(self.rows.len());
        let rows = self
            .rows
            .into_iter()
            .filter(|row| seen.insert(row.clone()))
            .collect();
        Self { headers: self.headers, rows }
    }
}
