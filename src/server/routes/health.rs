//! Health check endpoint

use axum::{extract::State, Json};
use serde::Serialize;

use crate::backend::backend_name;
use crate::catalog::NUM_CLASSES;
use crate::server::state::SharedState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub uptime_seconds: u64,
    pub version: String,
    /// Inference backend the loaded model runs on
    pub backend: &'static str,
    /// Number of classes the classifier can output
    pub num_classes: usize,
}

/// GET /health - Health check endpoint
///
/// Reaching this handler at all means the model loaded at startup, so the
/// status is unconditionally "ok".
pub async fn health_check(State(state): State<SharedState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        uptime_seconds: state.uptime_seconds(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        backend: backend_name(),
        num_classes: NUM_CLASSES,
    })
}
