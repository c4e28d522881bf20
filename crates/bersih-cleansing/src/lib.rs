//! bersih-cleansing: Normalisation of informal Indonesian tweets.
//!
//! - `rules`: lowercase + regex cleansing chain
//! - `kamus`: alay and abusive substitution tables
//! - `table`: latin-1 CSV uploads and row deduplication
//! - `pipeline`: the four-step normaliser and batch cleansing

pub mod kamus;
pub mod pipeline;
pub mod rules;
pub mod table;

pub use kamus::{Kamus, KamusKind};
pub use pipeline::{NormalisedText, Normaliser};
pub use rules::{alphanumeric_only, remove_unnecessary_char, text_lower};
pub use table::{decode_latin1, TweetTable, TWEET_COLUMN};
