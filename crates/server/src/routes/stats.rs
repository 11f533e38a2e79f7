// crates/server/src/routes/stats.rs
//! Aggregate focus statistics endpoint.

use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};
use chrono::Utc;

use focus_flow_core::{compute_stats, FocusStats};

use crate::error::ApiResult;
use crate::identity::UserId;
use crate::state::AppState;

/// GET /api/stats - today and all-time focus totals for the caller.
///
/// One bulk read; the aggregation itself is pure.
pub async fn stats(
    State(state): State<Arc<AppState>>,
    user: UserId,
) -> ApiResult<Json<FocusStats>> {
    let sessions = state.store.list(user.as_str()).await?;
    Ok(Json(compute_stats(&sessions, Utc::now())))
}

/// Create the stats routes router.
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/stats", get(stats))
}
