//! Repository for the `adv_chat_sessions` table.

use petchat_core::types::DbId;
use sqlx::PgPool;

use crate::models::adv_session::ChatSession;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, scenario_id, current_dialogue_line_id, created_at, updated_at";

/// Provides create/read/advance operations for chat sessions. Sessions are
/// never deleted here.
pub struct ChatSessionRepo;

impl ChatSessionRepo {
    /// Start a session on `scenario_id` pointing at `initial_line_id`.
    pub async fn create(
        pool: &PgPool,
        scenario_id: DbId,
        initial_line_id: DbId,
    ) -> Result<ChatSession, sqlx::Error> {
        let query = format!(
            "INSERT INTO adv_chat_sessions (scenario_id, current_dialogue_line_id)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ChatSession>(&query)
            .bind(scenario_id)
            .bind(initial_line_id)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<ChatSession>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM adv_chat_sessions WHERE id = $1");
        sqlx::query_as::<_, ChatSession>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Move the session pointer from `expected_line_id` to `next_line_id`.
    ///
    /// The update only applies while the session still points at
    /// `expected_line_id`, so of two concurrent moves from the same line only
    /// one succeeds. Returns `None` when the row is missing or has already
    /// moved on.
    pub async fn advance(
        pool: &PgPool,
        id: DbId,
        expected_line_id: DbId,
        next_line_id: DbId,
    ) -> Result<Option<ChatSession>, sqlx::Error> {
        let query = format!(
            "UPDATE adv_chat_sessions SET current_dialogue_line_id = $3
             WHERE id = $1 AND current_dialogue_line_id = $2
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ChatSession>(&query)
            .bind(id)
            .bind(expected_line_id)
            .bind(next_line_id)
            .fetch_optional(pool)
            .await
    }
}
