//! POST /text-processing: single text.
//!
//! The response echoes the text through the alphanumeric filter while the
//! store receives the raw input unchanged.

use axum::{
    extract::{FromRequest, Multipart, Request, State},
    http::header::CONTENT_TYPE,
    Form, Json,
};
use bersih_cleansing::alphanumeric_only;
use bersih_common::{ApiError, BersihError};

use crate::handlers::{persist, ProcessedResponse};
use crate::state::SharedState;

/// Form field carrying the text.
pub const TEXT_FIELD: &str = "text";

/// The `text` form field, from either an urlencoded or a multipart body.
#[derive(Debug)]
pub struct TextField(pub String);

impl<S> FromRequest<S> for TextField
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_multipart = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .is_some_and(|ct| ct.starts_with("multipart/form-data"));

        let text = if is_multipart {
            let mut multipart = Multipart::from_request(req, state)
                .await
                .map_err(|e| ApiError::internal(e.body_text()))?;
            let mut found = None;
            while let Some(field) = multipart
                .next_field()
                .await
                .map_err(|e| ApiError::internal(e.body_text()))?
            {
                if field.name() == Some(TEXT_FIELD) {
                    found = Some(field.text().await.map_err(|e| ApiError::internal(e.body_text()))?);
                    break;
                }
            }
            found
        } else {
            // Repeated fields keep their first value
            let Form(fields) = Form::<Vec<(String, String)>>::from_request(req, state)
                .await
                .map_err(|e| ApiError::internal(e.body_text()))?;
            fields
                .into_iter()
                .find(|(name, _)| name == TEXT_FIELD)
                .map(|(_, value)| value)
        };

        text.map(TextField)
            .ok_or_else(|| BersihError::MissingField(TEXT_FIELD.to_string()).into())
    }
}

pub async fn text_processing(
    State(state): State<SharedState>,
    TextField(text): TextField,
) -> Result<Json<ProcessedResponse<String>>, ApiError> {
    tracing::debug!(chars = text.chars().count(), "Processing single text");

    let data = alphanumeric_only(&text);
    persist(state.store.clone(), vec![text]).await?;

    Ok(Json(ProcessedResponse::ok(data)))
}
