//! Dialogue character model and DTOs.

use petchat_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `adv_characters` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct AdvCharacter {
    pub id: DbId,
    /// Unique across all characters (e.g. "Narrator", "Mika").
    pub name: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a character.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateAdvCharacter {
    pub name: String,
}
