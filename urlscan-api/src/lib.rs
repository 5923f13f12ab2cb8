// ---------------------------------------------------------------------------
// HTTP server
// ---------------------------------------------------------------------------
//
// Serves the scan form, runs orchestrations for submitted URLs, and renders
// the persisted result log as inline HTML.

pub mod error;
mod form;
mod pages;
mod routes;
pub mod state;

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use state::AppState;

/// Configuration for the web server.
pub struct ApiConfig {
    pub listen_addr: SocketAddr,
    pub db_path: PathBuf,
}

/// Build the axum Router (useful for testing).
pub fn build_router(state: Arc<AppState>) -> axum::Router {
    routes::build_router(state)
}

/// Start the server and block until shutdown (Ctrl+C).
pub async fn start_server(config: ApiConfig) -> anyhow::Result<()> {
    let state = Arc::new(AppState::new(&config.db_path)?);

    let app = build_router(state);
    let listener = tokio::net::TcpListener::bind(config.listen_addr).await?;
    tracing::info!(addr = %config.listen_addr, "web server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("web server shut down");
    Ok(())
}

async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("failed to install Ctrl+C handler");
    tracing::info!("shutdown signal received");
}
