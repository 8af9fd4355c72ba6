//! Home endpoint - service overview
//!
//! The front door for page-rendering clients: names the service and lists
//! what it can do.

use axum::Json;
use serde::Serialize;

use crate::catalog::NUM_CLASSES;

#[derive(Serialize)]
pub struct HomeResponse {
    pub name: &'static str,
    pub version: &'static str,
    pub description: &'static str,
    pub num_classes: usize,
    pub endpoints: Vec<&'static str>,
}

/// GET / - Overview of the recognition service
pub async fn home() -> Json<HomeResponse> {
    Json(HomeResponse {
        name: "Skin Disease Recognition System",
        version: env!("CARGO_PKG_VERSION"),
        description: "Upload a skin photograph to classify it into one of \
                      ten disease categories and read about the result.",
        num_classes: NUM_CLASSES,
        endpoints: vec![
            "GET /health",
            "POST /predict",
            "GET /diseases",
            "GET /diseases/search?q=<name>",
        ],
    })
}
