// crates/core/src/lib.rs
//! Focus-flow domain logic.
//!
//! This crate holds everything the HTTP layer delegates to: the session
//! lifecycle state machine, aggregate statistics, task breakdown parsing,
//! calendar-link formatting, and the two collaborator seams (session
//! storage and the model-completion provider).

pub mod breakdown;
pub mod calendar;
pub mod lifecycle;
pub mod llm;
pub mod session;
pub mod stats;
pub mod store;

pub use breakdown::{decompose, parse_steps, BreakdownError, BreakdownStep};
pub use calendar::{calendar_link, CalendarLink};
pub use lifecycle::{
    end_session, list_sessions, start_session, LifecycleError, DEFAULT_LIST_LIMIT,
};
pub use session::{FocusSession, PLACEHOLDER_TITLE};
pub use stats::{compute_stats, FocusStats};
pub use store::{MemoryStore, SessionStore, StoreError, StoreResult};
