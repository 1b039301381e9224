//! Repository for the `adv_choices` table.

use petchat_core::types::DbId;
use sqlx::PgPool;

use crate::models::adv_dialogue::{Choice, CreateChoice};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, source_dialogue_line_id, text, next_dialogue_line_id, created_at, updated_at";

/// Provides CRUD operations for choices.
pub struct ChoiceRepo;

impl ChoiceRepo {
    /// Attach a choice to `source_dialogue_line_id`, returning the created row.
    pub async fn create(
        pool: &PgPool,
        source_dialogue_line_id: DbId,
        input: &CreateChoice,
    ) -> Result<Choice, sqlx::Error> {
        let query = format!(
            "INSERT INTO adv_choices (source_dialogue_line_id, text, next_dialogue_line_id)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Choice>(&query)
            .bind(source_dialogue_line_id)
            .bind(&input.text)
            .bind(input.next_dialogue_line_id)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Choice>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM adv_choices WHERE id = $1");
        sqlx::query_as::<_, Choice>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Outgoing choices of one line, in creation order.
    pub async fn list_by_source(
        pool: &PgPool,
        source_dialogue_line_id: DbId,
    ) -> Result<Vec<Choice>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM adv_choices
             WHERE source_dialogue_line_id = $1
             ORDER BY id ASC"
        );
        sqlx::query_as::<_, Choice>(&query)
            .bind(source_dialogue_line_id)
            .fetch_all(pool)
            .await
    }

    /// Outgoing choices of many lines at once, ordered by source then id.
    pub async fn list_by_sources(
        pool: &PgPool,
        source_ids: &[DbId],
    ) -> Result<Vec<Choice>, sqlx::Error> {
        if source_ids.is_empty() {
            return Ok(Vec::new());
        }
        let query = format!(
            "SELECT {COLUMNS} FROM adv_choices
             WHERE source_dialogue_line_id = ANY($1)
             ORDER BY source_dialogue_line_id ASC, id ASC"
        );
        sqlx::query_as::<_, Choice>(&query)
            .bind(source_ids)
            .fetch_all(pool)
            .await
    }
}
