//! POST /text-processing-file: CSV upload.

use axum::{
    extract::{Multipart, State},
    Json,
};
use bersih_cleansing::TweetTable;
use bersih_common::{ApiError, BersihError};

use crate::handlers::{persist, ProcessedResponse};
use crate::state::SharedState;

/// Multipart field carrying the CSV.
pub const FILE_FIELD: &str = "file";

pub async fn text_processing_file(
    State(state): State<SharedState>,
    mut multipart: Multipart,
) -> Result<Json<ProcessedResponse<Vec<String>>>, ApiError> {
    let mut upload = None;
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::internal(e.body_text()))?
    {
        if field.name() == Some(FILE_FIELD) {
            let filename = field.file_name().unwrap_or("<unnamed>").to_string();
            let bytes = field
                .bytes()
                .await
                .map_err(|e| ApiError::internal(e.body_text()))?;
            tracing::debug!(%filename, bytes = bytes.len(), "Received upload");
            upload = Some(bytes);
            break;
        }
    }
    let bytes = upload.ok_or_else(|| BersihError::MissingField(FILE_FIELD.to_string()))?;

    // Everything is cleansed before anything is written
    let table = TweetTable::from_csv_bytes(&bytes)?;
    let cleaned = state.normaliser.apply_cleansing_file(table)?;

    let written = persist(state.store.clone(), cleaned.clone()).await?;
    tracing::info!(rows = written, "Processed upload");

    Ok(Json(ProcessedResponse::ok(cleaned)))
}
