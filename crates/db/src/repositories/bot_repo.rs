//! Repository for the `chat_bots` table.

use petchat_core::types::DbId;
use sqlx::PgPool;

use crate::models::bot::{ChatBot, CreateChatBot, UpdateChatBot};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, color, created_at, updated_at";

/// Provides CRUD operations for chat bots.
pub struct ChatBotRepo;

impl ChatBotRepo {
    /// Insert a new bot, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateChatBot) -> Result<ChatBot, sqlx::Error> {
        let query = format!(
            "INSERT INTO chat_bots (name, color)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ChatBot>(&query)
            .bind(&input.name)
            .bind(&input.color)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<ChatBot>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM chat_bots WHERE id = $1");
        sqlx::query_as::<_, ChatBot>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List bots, oldest first.
    pub async fn list(pool: &PgPool, limit: i64, offset: i64) -> Result<Vec<ChatBot>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM chat_bots ORDER BY id ASC LIMIT $1 OFFSET $2");
        sqlx::query_as::<_, ChatBot>(&query)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Update a bot. Only non-`None` fields in `input` are applied.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateChatBot,
    ) -> Result<Option<ChatBot>, sqlx::Error> {
        let query = format!(
            "UPDATE chat_bots SET
                name = COALESCE($2, name),
                color = COALESCE($3, color)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ChatBot>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.color)
            .fetch_optional(pool)
            .await
    }

    /// Delete a bot by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM chat_bots WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
