// crates/server/src/lib.rs
//! Focus-flow server library.
//!
//! Axum-based HTTP API for the deep work assistant: LLM-backed task
//! breakdown, focus-session tracking, aggregate stats, and calendar links.

pub mod error;
pub mod identity;
pub mod routes;
pub mod state;

pub use error::{ApiError, ApiResult, ErrorResponse};
pub use identity::{UserId, USER_ID_HEADER};
pub use routes::api_routes;
pub use state::AppState;

use std::sync::Arc;

use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Create the Axum application with all routes and middleware.
///
/// This sets up:
/// - API routes (health, breakdown, sessions, stats, calendar links)
/// - CORS for the development frontend (allows any origin)
/// - Request tracing
pub fn create_app(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    api_routes(state)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

// ============================================================================
// Integration Tests
// ============================================================================
