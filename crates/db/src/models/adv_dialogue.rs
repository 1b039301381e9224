//! Dialogue line and choice models and DTOs.

use petchat_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::adv_character::AdvCharacter;

/// A row from the `adv_dialogue_lines` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct DialogueLine {
    pub id: DbId,
    pub scenario_id: DbId,
    /// `None` for narrator lines.
    pub character_id: Option<DbId>,
    pub text: String,
    /// Position within the scenario (column `line_order`).
    #[sqlx(rename = "line_order")]
    pub order: i32,
    pub emotion: Option<String>,
    pub pose: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for appending a line to a scenario. The scenario comes from the path.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateDialogueLine {
    pub text: String,
    pub order: i32,
    pub character_id: Option<DbId>,
    pub emotion: Option<String>,
    pub pose: Option<String>,
}

/// A row from the `adv_choices` table: a labeled edge between two lines.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Choice {
    pub id: DbId,
    pub source_dialogue_line_id: DbId,
    pub text: String,
    pub next_dialogue_line_id: DbId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for attaching a choice to a line. The source line comes from the path.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateChoice {
    pub text: String,
    pub next_dialogue_line_id: DbId,
}

/// A dialogue line with its speaking character and outgoing choices resolved.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DialogueLineDetail {
    #[serde(flatten)]
    pub line: DialogueLine,
    pub character: Option<AdvCharacter>,
    pub choices_offered: Vec<Choice>,
}
