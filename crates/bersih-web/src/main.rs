//! bersih Web Server
//!
//! Run with: cargo run -p bersih-web

use bersih_config::Config;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    info!("Starting bersih web server...");

    let config = Config::load()?;

    // Kamus tables are loaded once here and shared read-only afterwards
    let state = bersih_web::state::AppState::from_config(&config)?;

    let app = bersih_web::router::build_router(state);

    let addr = config.server.listen_addr()?;
    info!("Server listening on http://{}", addr);
    info!("API documentation at http://{}/docs/", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
