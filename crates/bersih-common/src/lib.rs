//! bersih-common: Shared error types used across all bersih crates.

pub mod error;

pub use error::{ApiError, BersihError, Result};
