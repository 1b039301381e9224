//! Cat entity model and DTOs.

use petchat_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `cats` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Cat {
    pub id: DbId,
    pub name: String,
    pub breed: Option<String>,
    pub age: Option<i32>,
    /// Kilograms.
    pub weight: Option<f64>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a cat.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateCat {
    pub name: String,
    pub breed: Option<String>,
    pub age: Option<i32>,
    pub weight: Option<f64>,
}

/// DTO for updating a cat. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateCat {
    pub name: Option<String>,
    pub breed: Option<String>,
    pub age: Option<i32>,
    pub weight: Option<f64>,
}
