// crates/server/src/routes/mod.rs
//! API route handlers for the focus-flow server.

pub mod breakdown;
pub mod health;
pub mod sessions;
pub mod stats;

use std::sync::Arc;

use axum::Router;

use crate::state::AppState;

/// Create the combined router.
///
/// Routes:
/// - GET  /        - Welcome
/// - GET  /health  - Health check
/// - POST /api/breakdown - Break a task into steps via the model provider
/// - POST /api/sessions  - Start a focus session
/// - PATCH /api/sessions/{id} - End a session
/// - GET  /api/sessions  - List recent sessions (query: limit)
/// - GET  /api/stats     - Aggregate focus stats
/// - GET  /api/sessions/{id}/calendar-link - Calendar event URL
pub fn api_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .merge(health::router())
        .nest("/api", sessions::router())
        .nest("/api", stats::router())
        .nest("/api", breakdown::router())
        .with_state(state)
}
