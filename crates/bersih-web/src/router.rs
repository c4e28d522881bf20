//! Axum router: maps all URL paths to handlers.

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::CorsLayer,
    trace::TraceLayer,
    compression::CompressionLayer,
};
use std::sync::Arc;
use crate::state::{AppState, SharedState};
use crate::handlers::{
    docs::{docs_json, docs_ui},
    file::text_processing_file,
    system::healthz,
    text::text_processing,
};

/// Build and return the full Axum router.
pub fn build_router(state: AppState) -> Router {
    let body_limit = state.max_upload_bytes;
    let shared: SharedState = Arc::new(state);

    Router::new()
        // Processing
        .route("/text-processing",      post(text_processing))
        .route("/text-processing-file", post(text_processing_file))

        // API documentation
        .route("/docs.json", get(docs_json))
        .route("/docs/",     get(docs_ui))

        .route("/healthz", get(healthz))

        // Middleware
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(CorsLayer::permissive())
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(shared)
}
