// crates/db/src/queries.rs
// Session row access: upsert, user-scoped lookup, and listing.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::Row;

use focus_flow_core::{FocusSession, SessionStore, StoreError, StoreResult};

use crate::{Database, DbError, DbResult};

#[derive(Debug)]
struct SessionRow {
    id: String,
    user_id: String,
    task_title: String,
    started_at: i64,
    ended_at: Option<i64>,
}

impl<'r> sqlx::FromRow<'r, sqlx::sqlite::SqliteRow> for SessionRow {
    fn from_row(row: &'r sqlx::sqlite::SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            id: row.try_get("id")?,
            user_id: row.try_get("user_id")?,
            task_title: row.try_get("task_title")?,
            started_at: row.try_get("started_at")?,
            ended_at: row.try_get("ended_at")?,
        })
    }
}

impl SessionRow {
    fn into_session(self) -> FocusSession {
        FocusSession {
            id: self.id,
            user_id: self.user_id,
            task_title: self.task_title,
            started_at: epoch_to_utc(self.started_at),
            ended_at: self.ended_at.map(epoch_to_utc),
        }
    }
}

fn epoch_to_utc(secs: i64) -> DateTime<Utc> {
    DateTime::from_timestamp(secs, 0).unwrap_or_default()
}

impl Database {
    /// Insert a session, or update `ended_at` if the id already exists.
    ///
    /// Identity columns (owner, title, start) are written once at insert and
    /// never overwritten by the upsert.
    pub async fn upsert_session(&self, session: &FocusSession) -> DbResult<()> {
        sqlx::query(
            r#"
            INSERT INTO focus_sessions (id, user_id, task_title, started_at, ended_at)
            VALUES (?1, ?2, ?3, ?4, ?5)
            ON CONFLICT(id) DO UPDATE SET
                ended_at = excluded.ended_at
            "#,
        )
        .bind(&session.id)
        .bind(&session.user_id)
        .bind(&session.task_title)
        .bind(session.started_at.timestamp())
        .bind(session.ended_at.map(|t| t.timestamp()))
        .execute(self.pool())
        .await?;
        Ok(())
    }

    /// Fetch one session scoped to `(user_id, session_id)`.
    pub async fn find_session(
        &self,
        user_id: &str,
        session_id: &str,
    ) -> DbResult<Option<FocusSession>> {
        let row = sqlx::query_as::<_, SessionRow>(
            r#"
            SELECT id, user_id, task_title, started_at, ended_at
            FROM focus_sessions
            WHERE id = ?1 AND user_id = ?2
            "#,
        )
        .bind(session_id)
        .bind(user_id)
        .fetch_optional(self.pool())
        .await?;
        Ok(row.map(SessionRow::into_session))
    }

    /// All sessions owned by a user, newest first.
    pub async fn sessions_for_user(&self, user_id: &str) -> DbResult<Vec<FocusSession>> {
        let rows = sqlx::query_as::<_, SessionRow>(
            r#"
            SELECT id, user_id, task_title, started_at, ended_at
            FROM focus_sessions
            WHERE user_id = ?1
            ORDER BY started_at DESC, id
            "#,
        )
        .bind(user_id)
        .fetch_all(self.pool())
        .await?;
        Ok(rows.into_iter().map(SessionRow::into_session).collect())
    }
}

#[async_trait]
impl SessionStore for Database {
    async fn put(&self, session: &FocusSession) -> StoreResult<()> {
        self.upsert_session(session).await.map_err(into_store_error)
    }

    async fn get(&self, user_id: &str, session_id: &str) -> StoreResult<Option<FocusSession>> {
        self.find_session(user_id, session_id)
            .await
            .map_err(into_store_error)
    }

    async fn list(&self, user_id: &str) -> StoreResult<Vec<FocusSession>> {
        self.sessions_for_user(user_id)
            .await
            .map_err(into_store_error)
    }
}

fn into_store_error(err: DbError) -> StoreError {
    StoreError::Backend(err.to_string())
}
