//! Database error types.

use bersih_common::BersihError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, DbError>;

#[derive(Debug, Error)]
pub enum DbError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Store lock poisoned")]
    Poisoned,
}

impl From<DbError> for BersihError {
    fn from(err: DbError) -> Self {
        BersihError::Storage(err.to_string())
    }
}
