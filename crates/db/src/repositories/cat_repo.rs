//! Repository for the `cats` table.

use petchat_core::types::DbId;
use sqlx::PgPool;

use crate::models::cat::{Cat, CreateCat, UpdateCat};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, breed, age, weight, created_at, updated_at";

/// Provides CRUD operations for cats.
pub struct CatRepo;

impl CatRepo {
    /// Insert a new cat, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateCat) -> Result<Cat, sqlx::Error> {
        let query = format!(
            "INSERT INTO cats (name, breed, age, weight)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Cat>(&query)
            .bind(&input.name)
            .bind(&input.breed)
            .bind(input.age)
            .bind(input.weight)
            .fetch_one(pool)
            .await
    }

    /// Find a cat by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Cat>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM cats WHERE id = $1");
        sqlx::query_as::<_, Cat>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List cats, oldest first.
    pub async fn list(pool: &PgPool, limit: i64, offset: i64) -> Result<Vec<Cat>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM cats ORDER BY id ASC LIMIT $1 OFFSET $2");
        sqlx::query_as::<_, Cat>(&query)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Update a cat. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateCat,
    ) -> Result<Option<Cat>, sqlx::Error> {
        let query = format!(
            "UPDATE cats SET
                name = COALESCE($2, name),
                breed = COALESCE($3, breed),
                age = COALESCE($4, age),
                weight = COALESCE($5, weight)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Cat>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.breed)
            .bind(input.age)
            .bind(input.weight)
            .fetch_optional(pool)
            .await
    }

    /// Delete a cat by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM cats WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
