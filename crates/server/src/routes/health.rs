// crates/server/src/routes/health.rs
//! Liveness and welcome endpoints.

use std::sync::Arc;

use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// Response for the health check endpoint.
#[derive(Debug, Serialize)]
#[cfg_attr(test, derive(serde::Deserialize))]
pub struct HealthResponse {
    pub status: String,
    pub message: String,
}

/// Response for the root welcome endpoint.
#[derive(Debug, Serialize)]
#[cfg_attr(test, derive(serde::Deserialize))]
pub struct WelcomeResponse {
    pub app: String,
    pub docs: String,
}

/// GET /health - liveness probe. The frontend calls this first.
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        message: "Focus Flow API is running".to_string(),
    })
}

/// GET / - root welcome.
pub async fn root() -> Json<WelcomeResponse> {
    Json(WelcomeResponse {
        app: "Focus Flow".to_string(),
        docs: "/docs".to_string(),
    })
}

/// Create the health routes router.
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health_check))
}
