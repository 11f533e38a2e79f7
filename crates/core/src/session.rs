// crates/core/src/session.rs
//! The persisted focus-session record.

use chrono::{DateTime, Timelike, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Title substituted when a caller submits a blank task title.
pub const PLACEHOLDER_TITLE: &str = "Focus";

/// One timed focus session owned by a single user.
///
/// `ended_at` is `None` while the session is active and is set exactly once;
/// sessions are never reopened and never deleted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FocusSession {
    pub id: String,
    pub user_id: String,
    pub task_title: String,
    pub started_at: DateTime<Utc>,
    pub ended_at: Option<DateTime<Utc>>,
}

impl FocusSession {
    /// Create a fresh active session for `user_id`.
    ///
    /// The title is trimmed; a blank title becomes [`PLACEHOLDER_TITLE`].
    pub fn start(user_id: &str, task_title: &str) -> Self {
        let trimmed = task_title.trim();
        Self {
            id: Uuid::new_v4().to_string(),
            user_id: user_id.to_string(),
            task_title: if trimmed.is_empty() {
                PLACEHOLDER_TITLE.to_string()
            } else {
                trimmed.to_string()
            },
            started_at: utc_now_secs(),
            ended_at: None,
        }
    }

    pub fn is_ended(&self) -> bool {
        self.ended_at.is_some()
    }
}

/// Current time truncated to whole seconds.
///
/// Storage keeps timestamps as integer Unix seconds; truncating at creation
/// keeps the record handed back from a write identical to what a later read
/// returns.
pub(crate) fn utc_now_secs() -> DateTime<Utc> {
    let now = Utc::now();
    now.with_nanosecond(0).unwrap_or(now)
}
