//! Repository for the `dogs` table.

use petchat_core::types::DbId;
use sqlx::PgPool;

use crate::models::dog::{CreateDog, Dog, UpdateDog};

const COLUMNS: &str = "id, name, breed, age, created_at, updated_at";

/// Provides CRUD operations for dogs.
pub struct DogRepo;

impl DogRepo {
    pub async fn create(pool: &PgPool, input: &CreateDog) -> Result<Dog, sqlx::Error> {
        let query = format!(
            "INSERT INTO dogs (name, breed, age)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Dog>(&query)
            .bind(&input.name)
            .bind(&input.breed)
            .bind(input.age)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Dog>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM dogs WHERE id = $1");
        sqlx::query_as::<_, Dog>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn list(pool: &PgPool, limit: i64, offset: i64) -> Result<Vec<Dog>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM dogs ORDER BY id ASC LIMIT $1 OFFSET $2");
        sqlx::query_as::<_, Dog>(&query)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Total number of dogs, independent of any page window.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM dogs")
            .fetch_one(pool)
            .await
    }

    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateDog,
    ) -> Result<Option<Dog>, sqlx::Error> {
        let query = format!(
            "UPDATE dogs SET
                name = COALESCE($2, name),
                breed = COALESCE($3, breed),
                age = COALESCE($4, age)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Dog>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.breed)
            .bind(input.age)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM dogs WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
