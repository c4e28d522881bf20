//! The narrow storage interface the web layer writes through.

use crate::error::{DbError, Result};
use crate::tweets::TweetRepository;
use std::sync::Mutex;

/// Append-only sink for cleaned texts.
///
/// An implementation opens its backing store, writes every text (or none)
/// and closes it again within one call.
pub trait TweetStore: Send + Sync {
    fn append(&self, texts: &[String]) -> Result<usize>;
}

impl TweetStore for TweetRepository {
    fn append(&self, texts: &[String]) -> Result<usize> {
        self.insert_batch(texts)
    }
}

/// In-process store, for tests and dry runs.
#[derive(Debug, Default)]
pub struct MemoryStore {
    rows: Mutex<Vec<String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rows(&self) -> Vec<String> {
        self.rows
            .lock()
            .map(|rows| rows.clone())
            .unwrap_or_default()
    }
}

impl TweetStore for MemoryStore {
    fn append(&self, texts: &[String]) -> Result<usize> {
        let mut rows = self.rows.lock().map_err(|_| DbError::Poisoned)?;
        rows.extend(texts.iter().cloned());
        Ok(texts.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_appends_in_order() {
        let store = MemoryStore::new();
        store.append(&["a".to_string()]).unwrap();
        store.append(&["b".to_string(), "c".to_string()]).unwrap();
        assert_eq!(store.rows(), vec!["a", "b", "c"]);
    }
}
