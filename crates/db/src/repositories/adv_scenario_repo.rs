//! Repository for the `adv_scenarios` table.

use petchat_core::types::DbId;
use sqlx::PgPool;

use crate::models::adv_scenario::{AdvScenario, CreateAdvScenario, UpdateAdvScenario};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, description, first_dialogue_line_id, created_at, updated_at";

/// Provides CRUD operations for scenarios.
pub struct AdvScenarioRepo;

impl AdvScenarioRepo {
    /// Insert a new scenario with no explicit first line.
    pub async fn create(
        pool: &PgPool,
        input: &CreateAdvScenario,
    ) -> Result<AdvScenario, sqlx::Error> {
        let query = format!(
            "INSERT INTO adv_scenarios (name, description)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, AdvScenario>(&query)
            .bind(&input.name)
            .bind(&input.description)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<AdvScenario>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM adv_scenarios WHERE id = $1");
        sqlx::query_as::<_, AdvScenario>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a scenario by name (case-sensitive).
    pub async fn find_by_name(
        pool: &PgPool,
        name: &str,
    ) -> Result<Option<AdvScenario>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM adv_scenarios WHERE name = $1");
        sqlx::query_as::<_, AdvScenario>(&query)
            .bind(name)
            .fetch_optional(pool)
            .await
    }

    /// List scenarios ordered by name ascending.
    pub async fn list(
        pool: &PgPool,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<AdvScenario>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM adv_scenarios ORDER BY name ASC LIMIT $1 OFFSET $2");
        sqlx::query_as::<_, AdvScenario>(&query)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Update a scenario. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists. The caller is
    /// responsible for checking that `first_dialogue_line_id` belongs to
    /// this scenario.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateAdvScenario,
    ) -> Result<Option<AdvScenario>, sqlx::Error> {
        // An explicit null clears the entry point; an absent key keeps it.
        let first_line_provided = input.first_dialogue_line_id.is_some();
        let first_line = input.first_dialogue_line_id.flatten();

        let query = format!(
            "UPDATE adv_scenarios SET
                name = COALESCE($2, name),
                description = COALESCE($3, description),
                first_dialogue_line_id = CASE WHEN $4 THEN $5 ELSE first_dialogue_line_id END
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, AdvScenario>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.description)
            .bind(first_line_provided)
            .bind(first_line)
            .fetch_optional(pool)
            .await
    }
}
