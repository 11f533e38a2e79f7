// crates/server/src/state.rs
//! Application state for the Axum server.

use std::sync::Arc;

use focus_flow_core::llm::CompletionProvider;
use focus_flow_core::SessionStore;

/// Shared application state accessible from all route handlers.
pub struct AppState {
    /// Session storage collaborator (SQLite in production, in-memory in tests).
    pub store: Arc<dyn SessionStore>,
    /// Model-completion collaborator; `None` when no credential is configured,
    /// in which case breakdown requests fail with 503.
    pub llm: Option<Arc<dyn CompletionProvider>>,
}

impl AppState {
    /// Create application state wrapped in an Arc for sharing.
    pub fn new(
        store: Arc<dyn SessionStore>,
        llm: Option<Arc<dyn CompletionProvider>>,
    ) -> Arc<Self> {
        Arc::new(Self { store, llm })
    }
}
