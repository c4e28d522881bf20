use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BersihError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Missing column: {0}")]
    MissingColumn(String),

    #[error("Missing form field: {0}")]
    MissingField(String),

    #[error("Kamus error: {0}")]
    Kamus(String),

    #[error("Storage error: {0}")]
    Storage(String),
}

pub type Result<T> = std::result::Result<T, BersihError>;

/// Error returned by HTTP handlers.
///
/// Every failure surfaces to the caller as a generic server error carrying
/// the same `{status_code, description, data}` envelope the success
/// responses use.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: message.into(),
        }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<BersihError> for ApiError {
    fn from(err: BersihError) -> Self {
        ApiError::internal(err.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        tracing::error!(status = %self.status, message = %self.message, "request failed");
        let body = json!({
            "status_code": self.status.as_u16(),
            "description": self.message,
            "data": null,
        });
        (self.status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;
    use serde_json::Value;

    #[test]
    fn test_bersih_error_becomes_internal() {
        let err: ApiError = BersihError::MissingColumn("Tweet".to_string()).into();
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.message(), "Missing column: Tweet");
    }

    #[tokio::test]
    async fn test_error_envelope_shape() {
        let response = ApiError::internal("boom").into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let value: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(value["status_code"], 500);
        assert_eq!(value["description"], "boom");
        assert!(value["data"].is_null());
    }
}
