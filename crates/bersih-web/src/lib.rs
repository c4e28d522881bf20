//! bersih-web: HTTP surface for the tweet cleansing pipeline.
//! Provides:
//!   - Single text processing
//!   - CSV upload processing
//!   - OpenAPI document and Swagger UI
//!   - Health check

pub mod router;
pub mod handlers;
pub mod state;
