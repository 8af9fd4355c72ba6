//! HTTP API server for the skin disease recognition system
//!
//! Provides endpoints for image classification, the disease catalog, and
//! the health bot search. Page rendering is left to clients; this layer
//! only speaks JSON. The model is loaded once at startup and shared
//! read-only across requests.

pub mod routes;
pub mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::backend::{backend_name, default_device};
use crate::inference::Predictor;
use crate::utils::error::{Result, SkinScanError};
use self::state::{AppState, ServerConfig, SharedState};

/// Build the application router
pub fn router(state: SharedState) -> Router {
    let max_upload_bytes = state.config.max_upload_bytes;

    Router::new()
        // Overview and health
        .route("/", get(routes::home::home))
        .route("/health", get(routes::health::health_check))
        // Recognition
        .route("/predict", post(routes::predict::predict))
        // Disease catalog and health bot
        .route("/diseases", get(routes::diseases::list_diseases))
        .route("/diseases/search", get(routes::diseases::search_diseases))
        // Add state
        .with_state(state)
        // Add middleware
        .layer(DefaultBodyLimit::max(max_upload_bytes))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}

/// Load the model once, then serve the HTTP API until shutdown
pub async fn serve(config: ServerConfig, host: &str, port: u16) -> Result<()> {
    info!("Loading model from {:?}", config.model_path);
    let device = default_device();
    let predictor = Predictor::load(&config.model_path, &device)?;
    info!("Model loaded, backend: {}", backend_name());

    let state = Arc::new(AppState::new(config, predictor));
    let app = router(state);

    let addr: SocketAddr = format!("{}:{}", host, port)
        .parse()
        .map_err(|e| SkinScanError::Config(format!("invalid listen address: {}", e)))?;
    info!("Starting server on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
