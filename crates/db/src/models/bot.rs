//! Chat bot entity model and DTOs.

use petchat_core::pets::DEFAULT_BOT_COLOR;
use petchat_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `chat_bots` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ChatBot {
    pub id: DbId,
    pub name: String,
    /// Six hex digits, no leading `#`.
    pub color: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a bot. Both fields fall back to defaults when omitted.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateChatBot {
    #[serde(default)]
    pub name: String,
    #[serde(default = "default_color")]
    pub color: String,
}

fn default_color() -> String {
    DEFAULT_BOT_COLOR.to_string()
}

/// DTO for updating a bot. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateChatBot {
    pub name: Option<String>,
    pub color: Option<String>,
}
