// crates/server/src/routes/sessions.rs
//! Focus-session endpoints: start, end, list, and calendar link.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    routing::{get, patch, post},
    Json, Router,
};
use serde::Deserialize;

use focus_flow_core::{
    calendar_link, end_session, list_sessions, start_session, CalendarLink, FocusSession,
    DEFAULT_LIST_LIMIT,
};

use crate::error::{ApiError, ApiResult};
use crate::identity::UserId;
use crate::state::AppState;

/// Request body for POST /api/sessions.
#[derive(Debug, Deserialize)]
pub struct StartSessionRequest {
    pub task_title: String,
}

/// Query parameters for GET /api/sessions.
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct ListSessionsQuery {
    pub limit: Option<i64>,
}

/// POST /api/sessions - start a focus session for the caller.
///
/// Returns the new session with its id and `started_at`.
pub async fn start(
    State(state): State<Arc<AppState>>,
    user: UserId,
    Json(req): Json<StartSessionRequest>,
) -> ApiResult<Json<FocusSession>> {
    let session = start_session(state.store.as_ref(), user.as_str(), &req.task_title).await?;
    Ok(Json(session))
}

/// PATCH /api/sessions/{id} - end an active session, setting `ended_at`.
pub async fn end(
    State(state): State<Arc<AppState>>,
    user: UserId,
    Path(session_id): Path<String>,
) -> ApiResult<Json<FocusSession>> {
    let session = end_session(state.store.as_ref(), user.as_str(), &session_id).await?;
    Ok(Json(session))
}

/// GET /api/sessions - recent sessions for the caller, newest first.
pub async fn list(
    State(state): State<Arc<AppState>>,
    user: UserId,
    Query(query): Query<ListSessionsQuery>,
) -> ApiResult<Json<Vec<FocusSession>>> {
    let limit = query.limit.unwrap_or(DEFAULT_LIST_LIMIT);
    let sessions = list_sessions(state.store.as_ref(), user.as_str(), limit).await?;
    Ok(Json(sessions))
}

/// GET /api/sessions/{id}/calendar-link - Google Calendar URL so the caller
/// can block focus time. Active sessions get a default 60-minute block.
pub async fn calendar(
    State(state): State<Arc<AppState>>,
    user: UserId,
    Path(session_id): Path<String>,
) -> ApiResult<Json<CalendarLink>> {
    let session = state
        .store
        .get(user.as_str(), &session_id)
        .await?
        .ok_or_else(|| ApiError::SessionNotFound(session_id.clone()))?;
    Ok(Json(calendar_link(&session)))
}

/// Create the session routes router.
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/sessions", post(start).get(list))
        .route("/sessions/{id}", patch(end))
        .route("/sessions/{id}/calendar-link", get(calendar))
}
