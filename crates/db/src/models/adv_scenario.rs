//! Scenario model and DTOs.

use petchat_core::types::{DbId, Timestamp};
use serde::{Deserialize, Deserializer, Serialize};
use sqlx::FromRow;

use crate::models::adv_dialogue::DialogueLineDetail;

/// A row from the `adv_scenarios` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct AdvScenario {
    pub id: DbId,
    pub name: String,
    pub description: Option<String>,
    /// Explicit entry point. When `None`, sessions start on the
    /// lowest-`order` line of the scenario.
    pub first_dialogue_line_id: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a scenario.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateAdvScenario {
    pub name: String,
    pub description: Option<String>,
}

/// DTO for updating a scenario. All fields are optional.
///
/// `first_dialogue_line_id` distinguishes an absent key (`None`, keep) from
/// an explicit `null` (`Some(None)`, clear back to the lowest-`order` line).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateAdvScenario {
    pub name: Option<String>,
    pub description: Option<String>,
    #[serde(default, deserialize_with = "present")]
    pub first_dialogue_line_id: Option<Option<DbId>>,
}

/// Wrap any present value, `null` included, in `Some`.
fn present<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// A scenario together with every dialogue line, ordered by `order`.
#[derive(Debug, Clone, Serialize)]
pub struct AdvScenarioDetail {
    #[serde(flatten)]
    pub scenario: AdvScenario,
    pub dialogue_lines: Vec<DialogueLineDetail>,
}
