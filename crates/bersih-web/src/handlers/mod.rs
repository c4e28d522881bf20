//! HTTP handlers for all web routes.

pub mod docs;
pub mod file;
pub mod system;
pub mod text;

use std::sync::Arc;

use bersih_common::{ApiError, BersihError};
use bersih_db::TweetStore;
use serde::Serialize;

/// Description returned with every successful processing response.
pub const PROCESSED_DESCRIPTION: &str = "Teks yang sudah diproses";

/// JSON envelope shared by both processing routes.
#[derive(Debug, Serialize)]
pub struct ProcessedResponse<T> {
    pub status_code: u16,
    pub description: String,
    pub data: T,
}

impl<T> ProcessedResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            status_code: 200,
            description: PROCESSED_DESCRIPTION.to_string(),
            data,
        }
    }
}

/// Append texts to the store off the async workers.
pub(crate) async fn persist(store: Arc<dyn TweetStore>, texts: Vec<String>) -> Result<usize, ApiError> {
    let written = tokio::task::spawn_blocking(move || store.append(&texts))
        .await
        .map_err(|e| ApiError::internal(format!("storage task failed: {e}")))?
        .map_err(BersihError::from)?;
    Ok(written)
}
