//! Dog entity model and DTOs.

use petchat_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `dogs` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Dog {
    pub id: DbId,
    pub name: String,
    pub breed: Option<String>,
    pub age: Option<i32>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateDog {
    pub name: String,
    pub breed: Option<String>,
    pub age: Option<i32>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateDog {
    pub name: Option<String>,
    pub breed: Option<String>,
    pub age: Option<i32>,
}

/// List response for `GET /dogs`.
#[derive(Debug, Serialize)]
pub struct DogList {
    pub dogs: Vec<Dog>,
    /// All dogs, not just this page.
    pub count: i64,
}
