//! Schema for the output table.

/// Table receiving every cleaned text.
pub const TABLE_TWEET: &str = "tweet";

/// The table's only column.
pub const COLUMN_TEXT: &str = "text";

pub(crate) const CREATE_TWEET_TABLE: &str = "CREATE TABLE IF NOT EXISTS tweet (text VARCHAR)";

pub(crate) const INSERT_TWEET: &str = "INSERT INTO tweet (text) VALUES (?1)";
