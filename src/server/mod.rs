pub mod api;

use crate::scanner::ScanEngine;
use axum::{routing::get, Router};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::Mutex;
use tower_http::cors::{Any, CorsLayer};

/// Application state shared across all handlers.
///
/// The scan engine carries the session's diversity state, which is not safe
/// for unsynchronized concurrent use, so it sits behind a mutex and each
/// request holds the lock for the duration of its orchestration.
#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<Mutex<ScanEngine>>,
    pub started_at: Instant,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            engine: Arc::new(Mutex::new(ScanEngine::new())),
            started_at: Instant::now(),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

/// Start the axum server
pub async fn serve(port: u16) -> crate::error::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    tracing::info!("Starting marketscan server");

    let app_state = AppState::new();

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([axum::http::Method::GET, axum::http::Method::OPTIONS])
        .allow_headers(Any);

    tracing::info!("Registering routes:");
    tracing::info!("  GET /scans");
    tracing::info!("  GET /scans/{{slug}}?pe_ratio_max=20&rsi_oversold=true");
    tracing::info!("  GET /health");

    let app = Router::new()
        .route("/scans", get(api::list_scans_handler))
        .route("/scans/{slug}", get(api::scan_results_handler))
        .route("/health", get(api::health_handler))
        .layer(cors)
        .with_state(app_state);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!(%addr, "Server listening");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .await
        .map_err(|e| crate::error::AppError::Server(e.to_string()))?;

    Ok(())
}
