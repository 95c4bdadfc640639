//! Session registry: maps (app, user, session) to conversation history and
//! an optional interview stage tag.

use std::collections::HashMap;

use async_trait::async_trait;
use sqlx::PgPool;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::session::{InterviewStage, Turn, TurnRole, TurnRow};

/// Generates an opaque session id: `{prefix}_{random8hex}`.
pub fn new_session_id(prefix: &str) -> String {
    let hex = Uuid::new_v4().simple().to_string();
    format!("{prefix}_{}", &hex[..8])
}

/// Storage behind all session state. Swapped for an in-memory fake in tests.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Creates the session if absent. Idempotent: an existing session is
    /// success, not failure. Storage errors on first creation propagate.
    async fn ensure(&self, user_id: &str, session_id: &str) -> Result<(), AppError>;

    async fn exists(&self, session_id: &str) -> Result<bool, AppError>;

    async fn append_turn(
        &self,
        session_id: &str,
        role: TurnRole,
        text: &str,
    ) -> Result<(), AppError>;

    /// Ordered conversation history, oldest first.
    async fn history(&self, session_id: &str) -> Result<Vec<Turn>, AppError>;

    /// Stage tag, if this is an interactive session. `None` for one-shot
    /// sessions and for unknown ids; use `exists` to tell them apart.
    async fn stage(&self, session_id: &str) -> Result<Option<InterviewStage>, AppError>;

    async fn set_stage(&self, session_id: &str, stage: InterviewStage) -> Result<(), AppError>;
}

// ────────────────────────────────────────────────────────────────────────────
// Postgres implementation
// ────────────────────────────────────────────────────────────────────────────

/// Durable store over the `sessions` / `session_turns` tables.
pub struct PgSessionStore {
    pool: PgPool,
    app_name: &'static str,
}

impl PgSessionStore {
    pub fn new(pool: PgPool, app_name: &'static str) -> Self {
        Self { pool, app_name }
    }
}

#[async_trait]
impl SessionStore for PgSessionStore {
    async fn ensure(&self, user_id: &str, session_id: &str) -> Result<(), AppError> {
        // ON CONFLICT makes re-ensure a no-op while genuine storage failures
        // still surface through the Err path.
        sqlx::query(
            "INSERT INTO sessions (session_id, app_name, user_id) VALUES ($1, $2, $3)
             ON CONFLICT (session_id) DO NOTHING",
        )
        .bind(session_id)
        .bind(self.app_name)
        .bind(user_id)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn exists(&self, session_id: &str) -> Result<bool, AppError> {
        let found: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM sessions WHERE session_id = $1)")
                .bind(session_id)
                .fetch_one(&self.pool)
                .await?;
        Ok(found)
    }

    async fn append_turn(
        &self,
        session_id: &str,
        role: TurnRole,
        text: &str,
    ) -> Result<(), AppError> {
        sqlx::query("INSERT INTO session_turns (session_id, role, content) VALUES ($1, $2, $3)")
            .bind(session_id)
            .bind(role.as_str())
            .bind(text)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn history(&self, session_id: &str) -> Result<Vec<Turn>, AppError> {
        let rows: Vec<TurnRow> = sqlx::query_as(
            "SELECT role, content FROM session_turns WHERE session_id = $1 ORDER BY id",
        )
        .bind(session_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows
            .into_iter()
            .filter_map(|row| match TurnRole::parse(&row.role) {
                Some(role) => Some(Turn::new(role, row.content)),
                None => {
                    tracing::warn!("skipping turn with unknown role '{}'", row.role);
                    None
                }
            })
            .collect())
    }

    async fn stage(&self, session_id: &str) -> Result<Option<InterviewStage>, AppError> {
        let stage: Option<Option<String>> =
            sqlx::query_scalar("SELECT stage FROM sessions WHERE session_id = $1")
                .bind(session_id)
                .fetch_optional(&self.pool)
                .await?;
        Ok(stage.flatten().as_deref().and_then(InterviewStage::parse))
    }

    async fn set_stage(&self, session_id: &str, stage: InterviewStage) -> Result<(), AppError> {
        let result = sqlx::query("UPDATE sessions SET stage = $1 WHERE session_id = $2")
            .bind(stage.as_str())
            .bind(session_id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::Session(format!(
                "session '{session_id}' not found"
            )));
        }
        Ok(())
    }
}

// ────────────────────────────────────────────────────────────────────────────
// In-memory implementation (tests, local development)
// ────────────────────────────────────────────────────────────────────────────

struct MemorySession {
    #[allow(dead_code)]
    user_id: String,
    stage: Option<InterviewStage>,
    turns: Vec<Turn>,
}

/// Non-durable store used by the orchestration tests.
#[derive(Default)]
pub struct MemorySessionStore {
    sessions: RwLock<HashMap<String, MemorySession>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SessionStore for MemorySessionStore {
    async fn ensure(&self, user_id: &str, session_id: &str) -> Result<(), AppError> {
        let mut sessions = self.sessions.write().await;
        sessions
            .entry(session_id.to_string())
            .or_insert_with(|| MemorySession {
                user_id: user_id.to_string(),
                stage: None,
                turns: Vec::new(),
            });
        Ok(())
    }

    async fn exists(&self, session_id: &str) -> Result<bool, AppError> {
        Ok(self.sessions.read().await.contains_key(session_id))
    }

    async fn append_turn(
        &self,
        session_id: &str,
        role: TurnRole,
        text: &str,
    ) -> Result<(), AppError> {
        let mut sessions = self.sessions.write().await;
        let session = sessions
            .get_mut(session_id)
            .ok_or_else(|| AppError::Session(format!("session '{session_id}' not found")))?;
        session.turns.push(Turn::new(role, text));
        Ok(())
    }

    async fn history(&self, session_id: &str) -> Result<Vec<Turn>, AppError> {
        let sessions = self.sessions.read().await;
        Ok(sessions
            .get(session_id)
            .map(|s| s.turns.clone())
            .unwrap_or_default())
    }

    async fn stage(&self, session_id: &str) -> Result<Option<InterviewStage>, AppError> {
        let sessions = self.sessions.read().await;
        Ok(sessions.get(session_id).and_then(|s| s.stage))
    }

    async fn set_stage(&self, session_id: &str, stage: InterviewStage) -> Result<(), AppError> {
        let mut sessions = self.sessions.write().await;
        let session = sessions
            .get_mut(session_id)
            .ok_or_else(|| AppError::Session(format!("session '{session_id}' not found")))?;
        session.stage = Some(stage);
        Ok(())
    }
}
