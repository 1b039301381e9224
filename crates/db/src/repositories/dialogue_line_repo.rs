//! Repository for the `adv_dialogue_lines` table.

use petchat_core::types::DbId;
use sqlx::PgPool;

use crate::models::adv_dialogue::{CreateDialogueLine, DialogueLine};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, scenario_id, character_id, text, line_order, emotion, pose, created_at, updated_at";

/// Provides CRUD operations for dialogue lines.
pub struct DialogueLineRepo;

impl DialogueLineRepo {
    /// Append a line to `scenario_id`, returning the created row.
    pub async fn create(
        pool: &PgPool,
        scenario_id: DbId,
        input: &CreateDialogueLine,
    ) -> Result<DialogueLine, sqlx::Error> {
        let query = format!(
            "INSERT INTO adv_dialogue_lines (scenario_id, character_id, text, line_order, emotion, pose)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, DialogueLine>(&query)
            .bind(scenario_id)
            .bind(input.character_id)
            .bind(&input.text)
            .bind(input.order)
            .bind(&input.emotion)
            .bind(&input.pose)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<DialogueLine>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM adv_dialogue_lines WHERE id = $1");
        sqlx::query_as::<_, DialogueLine>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// All lines of a scenario, ordered by `order` then id.
    pub async fn list_by_scenario(
        pool: &PgPool,
        scenario_id: DbId,
    ) -> Result<Vec<DialogueLine>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM adv_dialogue_lines
             WHERE scenario_id = $1
             ORDER BY line_order ASC, id ASC"
        );
        sqlx::query_as::<_, DialogueLine>(&query)
            .bind(scenario_id)
            .fetch_all(pool)
            .await
    }

    /// `(id, order)` pairs of every line in a scenario, used to resolve the
    /// entry line without loading text.
    pub async fn list_order_keys(
        pool: &PgPool,
        scenario_id: DbId,
    ) -> Result<Vec<(DbId, i32)>, sqlx::Error> {
        sqlx::query_as::<_, (DbId, i32)>(
            "SELECT id, line_order FROM adv_dialogue_lines WHERE scenario_id = $1",
        )
        .bind(scenario_id)
        .fetch_all(pool)
        .await
    }
}
