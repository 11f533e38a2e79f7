// crates/db/src/migrations.rs
/// Inline SQL migrations for the focus-flow schema.
///
/// Simple inline migrations rather than sqlx migration files; the schema is
/// one table. Timestamps are integer Unix seconds (UTC).
pub const MIGRATIONS: &[&str] = &[
    // Migration 1: focus_sessions table
    r#"
CREATE TABLE IF NOT EXISTS focus_sessions (
    id TEXT PRIMARY KEY,
    user_id TEXT NOT NULL,
    task_title TEXT NOT NULL DEFAULT '',
    started_at INTEGER NOT NULL,
    ended_at INTEGER
);
"#,
    // Migration 2: user scoping + recency ordering
    r#"CREATE INDEX IF NOT EXISTS idx_focus_sessions_user ON focus_sessions(user_id);"#,
    r#"CREATE INDEX IF NOT EXISTS idx_focus_sessions_user_started ON focus_sessions(user_id, started_at DESC);"#,
];
