// crates/core/src/lifecycle.rs
//! Session lifecycle: active -> ended, one way.

use thiserror::Error;

use crate::session::{utc_now_secs, FocusSession};
use crate::store::{SessionStore, StoreError};

/// Default number of sessions returned by a list call.
pub const DEFAULT_LIST_LIMIT: i64 = 20;

#[derive(Debug, Error)]
pub enum LifecycleError {
    #[error("session not found: {session_id}")]
    NotFound { session_id: String },

    #[error("session already ended: {session_id}")]
    AlreadyEnded { session_id: String },

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Start a new focus session. One insert, always succeeds for a valid user.
pub async fn start_session(
    store: &dyn SessionStore,
    user_id: &str,
    task_title: &str,
) -> Result<FocusSession, LifecycleError> {
    let session = FocusSession::start(user_id, task_title);
    store.put(&session).await?;
    Ok(session)
}

/// End an active session, setting `ended_at` exactly once.
///
/// A session owned by another user reports `NotFound`, same as a missing id.
/// A failed attempt leaves the row untouched.
pub async fn end_session(
    store: &dyn SessionStore,
    user_id: &str,
    session_id: &str,
) -> Result<FocusSession, LifecycleError> {
    let mut session = store
        .get(user_id, session_id)
        .await?
        .ok_or_else(|| LifecycleError::NotFound {
            session_id: session_id.to_string(),
        })?;
    if session.is_ended() {
        return Err(LifecycleError::AlreadyEnded {
            session_id: session_id.to_string(),
        });
    }
    session.ended_at = Some(utc_now_secs());
    store.put(&session).await?;
    Ok(session)
}

/// Recent sessions for a user, newest first, truncated to `limit`.
///
/// A non-positive limit yields an empty list; a limit beyond the set
/// returns everything.
pub async fn list_sessions(
    store: &dyn SessionStore,
    user_id: &str,
    limit: i64,
) -> Result<Vec<FocusSession>, LifecycleError> {
    if limit <= 0 {
        return Ok(Vec::new());
    }
    let mut sessions = store.list(user_id).await?;
    sessions.truncate(limit as usize);
    Ok(sessions)
}
