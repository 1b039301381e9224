//! Branching-dialogue ("ADV chat") rules.
//!
//! A scenario is a directed graph of dialogue lines joined by choices. A chat
//! session is a pointer to one line of that graph. The functions here decide
//! where a session starts, whether a choice may be taken from the line the
//! session currently points at, and when a scenario has ended. The engine in
//! the API crate loads rows and applies these rules.

use crate::error::CoreError;
use crate::types::DbId;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Maximum length of a scenario name.
pub const MAX_SCENARIO_NAME_LENGTH: usize = 255;

/// Maximum length of a character name.
pub const MAX_CHARACTER_NAME_LENGTH: usize = 100;

/// Maximum length of the text shown on a choice button.
pub const MAX_CHOICE_TEXT_LENGTH: usize = 255;

/// Maximum length of the `emotion` and `pose` labels on a dialogue line.
pub const MAX_LABEL_LENGTH: usize = 50;

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

fn validate_required_text(field: &str, value: &str, max: Option<usize>) -> Result<(), CoreError> {
    if value.trim().is_empty() {
        return Err(CoreError::Validation(format!("{field} must not be empty")));
    }
    if let Some(max) = max {
        let len = value.chars().count();
        if len > max {
            return Err(CoreError::Validation(format!(
                "{field} must not exceed {max} characters, got {len}"
            )));
        }
    }
    Ok(())
}

/// Scenario names are required and at most [`MAX_SCENARIO_NAME_LENGTH`] characters.
pub fn validate_scenario_name(name: &str) -> Result<(), CoreError> {
    validate_required_text("Scenario name", name, Some(MAX_SCENARIO_NAME_LENGTH))
}

/// Character names are required and at most [`MAX_CHARACTER_NAME_LENGTH`] characters.
pub fn validate_character_name(name: &str) -> Result<(), CoreError> {
    validate_required_text("Character name", name, Some(MAX_CHARACTER_NAME_LENGTH))
}

/// Dialogue text is required; there is no upper bound (stored as TEXT).
pub fn validate_dialogue_text(text: &str) -> Result<(), CoreError> {
    validate_required_text("Dialogue text", text, None)
}

/// Choice text is required and at most [`MAX_CHOICE_TEXT_LENGTH`] characters.
pub fn validate_choice_text(text: &str) -> Result<(), CoreError> {
    validate_required_text("Choice text", text, Some(MAX_CHOICE_TEXT_LENGTH))
}

/// Optional `emotion` / `pose` labels, bounded by [`MAX_LABEL_LENGTH`].
pub fn validate_label(field: &str, value: Option<&str>) -> Result<(), CoreError> {
    match value {
        Some(v) if v.chars().count() > MAX_LABEL_LENGTH => Err(CoreError::Validation(format!(
            "{field} must not exceed {MAX_LABEL_LENGTH} characters"
        ))),
        _ => Ok(()),
    }
}

// ---------------------------------------------------------------------------
// State machine
// ---------------------------------------------------------------------------

/// Pick the line a new session starts on when the scenario has no usable
/// explicit first line: the lowest `order`, ties broken by lowest id.
///
/// `lines` yields `(id, order)` pairs. Returns `None` for an empty scenario.
pub fn lowest_order_line<I>(lines: I) -> Option<DbId>
where
    I: IntoIterator<Item = (DbId, i32)>,
{
    lines
        .into_iter()
        .min_by_key(|&(id, order)| (order, id))
        .map(|(id, _)| id)
}

/// A choice may only be taken from the line the session currently points at.
///
/// Rejects stale choices (taken from a line the session already left) and
/// choices belonging to a different session's position.
pub fn ensure_choice_applies(
    current_line_id: DbId,
    choice_id: DbId,
    choice_source_line_id: DbId,
) -> Result<(), CoreError> {
    if choice_source_line_id != current_line_id {
        return Err(CoreError::InvalidState(format!(
            "Choice {choice_id} is not available from the current dialogue line"
        )));
    }
    Ok(())
}

/// A line with no outgoing choices ends the scenario.
///
/// Cycles are legal, so a scenario whose every line offers a choice never
/// ends; that is not treated as an error.
pub fn is_end_of_scenario(choices_offered: usize) -> bool {
    choices_offered == 0
}

/// Both ends of a choice must belong to the same scenario so that a session
/// never leaves the scenario it was started on.
pub fn ensure_same_scenario(
    source_scenario_id: DbId,
    target_scenario_id: DbId,
) -> Result<(), CoreError> {
    if source_scenario_id != target_scenario_id {
        return Err(CoreError::Validation(format!(
            "Choice target belongs to scenario {target_scenario_id}, \
             but its source belongs to scenario {source_scenario_id}"
        )));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    // -- validation ---------------------------------------------------------

    #[test]
    fn scenario_name_rules() {
        assert!(validate_scenario_name("Rainy afternoon").is_ok());
        assert!(validate_scenario_name("").is_err());
        assert!(validate_scenario_name("   ").is_err());
        let long = "a".repeat(MAX_SCENARIO_NAME_LENGTH + 1);
        assert!(validate_scenario_name(&long).is_err());
        let max = "a".repeat(MAX_SCENARIO_NAME_LENGTH);
        assert!(validate_scenario_name(&max).is_ok());
    }

    #[test]
    fn character_name_counts_chars_not_bytes() {
        let name = "ね".repeat(MAX_CHARACTER_NAME_LENGTH);
        assert!(validate_character_name(&name).is_ok());
    }

    #[test]
    fn choice_text_too_long() {
        let text = "x".repeat(MAX_CHOICE_TEXT_LENGTH + 1);
        assert_matches!(validate_choice_text(&text), Err(CoreError::Validation(_)));
    }

    #[test]
    fn dialogue_text_required() {
        assert!(validate_dialogue_text("Hello there.").is_ok());
        assert!(validate_dialogue_text("\n").is_err());
    }

    #[test]
    fn labels_are_optional_but_bounded() {
        assert!(validate_label("Emotion", None).is_ok());
        assert!(validate_label("Emotion", Some("happy")).is_ok());
        let long = "p".repeat(MAX_LABEL_LENGTH + 1);
        assert!(validate_label("Pose", Some(&long)).is_err());
    }

    // -- lowest_order_line --------------------------------------------------

    #[test]
    fn empty_scenario_has_no_entry_line() {
        assert_eq!(lowest_order_line(Vec::new()), None);
    }

    #[test]
    fn picks_lowest_order() {
        let lines = vec![(10, 3), (11, 1), (12, 2)];
        assert_eq!(lowest_order_line(lines), Some(11));
    }

    #[test]
    fn order_ties_break_on_lowest_id() {
        let lines = vec![(7, 1), (5, 1), (9, 0), (3, 0)];
        assert_eq!(lowest_order_line(lines), Some(3));
    }

    #[test]
    fn negative_orders_are_allowed() {
        let lines = vec![(1, 0), (2, -5)];
        assert_eq!(lowest_order_line(lines), Some(2));
    }

    // -- ensure_choice_applies ----------------------------------------------

    #[test]
    fn choice_from_current_line_is_accepted() {
        assert!(ensure_choice_applies(4, 99, 4).is_ok());
    }

    #[test]
    fn stale_choice_is_invalid_state() {
        assert_matches!(
            ensure_choice_applies(5, 99, 4),
            Err(CoreError::InvalidState(msg)) if msg.contains("99")
        );
    }

    // -- is_end_of_scenario -------------------------------------------------

    #[test]
    fn terminal_iff_no_choices() {
        assert!(is_end_of_scenario(0));
        assert!(!is_end_of_scenario(1));
        assert!(!is_end_of_scenario(2));
    }

    // -- ensure_same_scenario -----------------------------------------------

    #[test]
    fn cross_scenario_edge_rejected() {
        assert!(ensure_same_scenario(1, 1).is_ok());
        assert_matches!(ensure_same_scenario(1, 2), Err(CoreError::Validation(_)));
    }
}
