// crates/core/src/store.rs
//! The session-storage seam.
//!
//! Storage has a single capability: get/put/query rows scoped to a user.
//! `MemoryStore` backs unit and router tests; the SQLite implementation
//! lives in `focus-flow-db`.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use thiserror::Error;

use crate::session::FocusSession;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage backend error: {0}")]
    Backend(String),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Durable home of [`FocusSession`] rows.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Insert a new row or update an existing one. Lifecycle code only ever
    /// changes `ended_at` on an update.
    async fn put(&self, session: &FocusSession) -> StoreResult<()>;

    /// Fetch one session scoped to `(user_id, session_id)`. Rows owned by
    /// other users are invisible, not forbidden.
    async fn get(&self, user_id: &str, session_id: &str) -> StoreResult<Option<FocusSession>>;

    /// All sessions owned by a user, newest `started_at` first.
    async fn list(&self, user_id: &str) -> StoreResult<Vec<FocusSession>>;
}

/// In-memory store keyed by session id.
#[derive(Debug, Default)]
pub struct MemoryStore {
    rows: Mutex<HashMap<String, FocusSession>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SessionStore for MemoryStore {
    async fn put(&self, session: &FocusSession) -> StoreResult<()> {
        let mut rows = self.rows.lock().expect("session store poisoned");
        rows.insert(session.id.clone(), session.clone());
        Ok(())
    }

    async fn get(&self, user_id: &str, session_id: &str) -> StoreResult<Option<FocusSession>> {
        let rows = self.rows.lock().expect("session store poisoned");
        Ok(rows
            .get(session_id)
            .filter(|s| s.user_id == user_id)
            .cloned())
    }

    async fn list(&self, user_id: &str) -> StoreResult<Vec<FocusSession>> {
        let rows = self.rows.lock().expect("session store poisoned");
        let mut sessions: Vec<FocusSession> = rows
            .values()
            .filter(|s| s.user_id == user_id)
            .cloned()
            .collect();
        sessions.sort_by(|a, b| b.started_at.cmp(&a.started_at).then(a.id.cmp(&b.id)));
        Ok(sessions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn session(id: &str, user: &str, started_secs: i64) -> FocusSession {
        FocusSession {
            id: id.to_string(),
            user_id: user.to_string(),
            task_title: "t".to_string(),
            started_at: Utc.timestamp_opt(started_secs, 0).unwrap(),
            ended_at: None,
        }
    }

    #[tokio::test]
    async fn get_is_scoped_to_owner() {
        let store = MemoryStore::new();
        store.put(&session("s1", "alice", 100)).await.unwrap();

        assert!(store.get("alice", "s1").await.unwrap().is_some());
        assert!(store.get("bob", "s1").await.unwrap().is_none());
        assert!(store.get("alice", "nope").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn list_orders_newest_first() {
        let store = MemoryStore::new();
        store.put(&session("old", "alice", 100)).await.unwrap();
        store.put(&session("new", "alice", 300)).await.unwrap();
        store.put(&session("mid", "alice", 200)).await.unwrap();
        store.put(&session("other", "bob", 400)).await.unwrap();

        let sessions = store.list("alice").await.unwrap();
        let ids: Vec<&str> = sessions.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["new", "mid", "old"]);
    }

    #[tokio::test]
    async fn put_overwrites_existing_row() {
        let store = MemoryStore::new();
        let mut s = session("s1", "alice", 100);
        store.put(&s).await.unwrap();

        s.ended_at = Some(Utc.timestamp_opt(160, 0).unwrap());
        store.put(&s).await.unwrap();

        let loaded = store.get("alice", "s1").await.unwrap().unwrap();
        assert_eq!(loaded.ended_at, s.ended_at);
    }
}
