// crates/server/src/routes/breakdown.rs
//! Task breakdown endpoint.

use std::sync::Arc;

use axum::{extract::State, routing::post, Json, Router};
use serde::Deserialize;

use focus_flow_core::{decompose, BreakdownStep};

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

/// Request body for POST /api/breakdown.
#[derive(Debug, Deserialize)]
pub struct BreakdownRequest {
    pub task: String,
}

/// POST /api/breakdown - break a vague task into concrete steps with time
/// estimates. Requires a configured model-completion credential.
pub async fn breakdown(
    State(state): State<Arc<AppState>>,
    Json(req): Json<BreakdownRequest>,
) -> ApiResult<Json<Vec<BreakdownStep>>> {
    let Some(provider) = state.llm.as_deref() else {
        return Err(ApiError::LlmNotConfigured);
    };
    let steps = decompose(provider, &req.task).await?;
    Ok(Json(steps))
}

/// Create the breakdown routes router.
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/breakdown", post(breakdown))
}
