//! Repository for the `adv_characters` table.

use petchat_core::types::DbId;
use sqlx::PgPool;

use crate::models::adv_character::{AdvCharacter, CreateAdvCharacter};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, created_at, updated_at";

/// Provides CRUD operations for dialogue characters.
pub struct AdvCharacterRepo;

impl AdvCharacterRepo {
    /// Insert a new character, returning the created row.
    ///
    /// A duplicate name violates `uq_adv_characters_name`.
    pub async fn create(
        pool: &PgPool,
        input: &CreateAdvCharacter,
    ) -> Result<AdvCharacter, sqlx::Error> {
        let query = format!(
            "INSERT INTO adv_characters (name) VALUES ($1) RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, AdvCharacter>(&query)
            .bind(&input.name)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<AdvCharacter>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM adv_characters WHERE id = $1");
        sqlx::query_as::<_, AdvCharacter>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a character by name (case-sensitive).
    pub async fn find_by_name(
        pool: &PgPool,
        name: &str,
    ) -> Result<Option<AdvCharacter>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM adv_characters WHERE name = $1");
        sqlx::query_as::<_, AdvCharacter>(&query)
            .bind(name)
            .fetch_optional(pool)
            .await
    }

    /// List characters ordered by name ascending.
    pub async fn list(
        pool: &PgPool,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<AdvCharacter>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM adv_characters ORDER BY name ASC LIMIT $1 OFFSET $2"
        );
        sqlx::query_as::<_, AdvCharacter>(&query)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Fetch every character whose id is in `ids`. Unknown ids are skipped.
    pub async fn list_by_ids(
        pool: &PgPool,
        ids: &[DbId],
    ) -> Result<Vec<AdvCharacter>, sqlx::Error> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        let query = format!("SELECT {COLUMNS} FROM adv_characters WHERE id = ANY($1)");
        sqlx::query_as::<_, AdvCharacter>(&query)
            .bind(ids)
            .fetch_all(pool)
            .await
    }
}
