//! Chat session model and the chat-state view returned to clients.

use petchat_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::adv_dialogue::DialogueLineDetail;

/// A row from the `adv_chat_sessions` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct ChatSession {
    pub id: DbId,
    pub scenario_id: DbId,
    pub current_dialogue_line_id: DbId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Request body for `POST /adv-chat/sessions/start`.
#[derive(Debug, Clone, Deserialize)]
pub struct StartChatRequest {
    pub scenario_id: DbId,
}

/// Request body for `POST /adv-chat/sessions/{id}/choice`.
#[derive(Debug, Clone, Deserialize)]
pub struct MakeChoiceRequest {
    pub choice_id: DbId,
}

/// Snapshot of where a session stands in its scenario.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatState {
    pub session_id: DbId,
    pub current_dialogue: DialogueLineDetail,
    pub scenario_name: String,
    /// True iff `current_dialogue.choices_offered` is empty.
    pub is_end_of_scenario: bool,
}
