//! bersih Database Layer
//!
//! Persists cleaned tweets into a single-table SQLite file. The table is
//! append-only and created on first use.
//!
//! # Example
//!
//! ```rust,no_run
//! use bersih_db::{Database, TweetRepository, TweetStore};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let db = Database::new("./result/data_text_result.db");
//!     let tweets = TweetRepository::new(std::sync::Arc::new(db));
//!     tweets.append(&["halo dunia".to_string()])?;
//!     Ok(())
//! }
//! ```

pub mod database;
pub mod error;
pub mod schema;
pub mod store;
pub mod tweets;

pub use database::Database;
pub use error::{DbError, Result};
pub use schema::{TABLE_TWEET, COLUMN_TEXT};
pub use store::{MemoryStore, TweetStore};
pub use tweets::TweetRepository;
