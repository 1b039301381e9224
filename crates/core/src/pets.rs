//! Validation for the simple pet-style resources: cats, dogs and chat bots.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::CoreError;

/// Colour assigned to a chat bot when the client does not send one.
pub const DEFAULT_BOT_COLOR: &str = "C5E24A";

/// Maximum length of a cat, dog or bot name.
pub const MAX_PET_NAME_LENGTH: usize = 255;

/// Oldest age accepted for a cat or dog, in years.
pub const MAX_PET_AGE: i32 = 100;

static BOT_COLOR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9A-Fa-f]{6}$").expect("valid regex"));

/// Cat and dog names are required.
pub fn validate_pet_name(name: &str) -> Result<(), CoreError> {
    if name.trim().is_empty() {
        return Err(CoreError::Validation("Name must not be empty".to_string()));
    }
    validate_name_length(name)
}

/// Bot names may be empty (the default) but are still bounded.
pub fn validate_name_length(name: &str) -> Result<(), CoreError> {
    if name.chars().count() > MAX_PET_NAME_LENGTH {
        return Err(CoreError::Validation(format!(
            "Name must not exceed {MAX_PET_NAME_LENGTH} characters"
        )));
    }
    Ok(())
}

pub fn validate_age(age: Option<i32>) -> Result<(), CoreError> {
    match age {
        Some(a) if !(0..=MAX_PET_AGE).contains(&a) => Err(CoreError::Validation(format!(
            "Age must be between 0 and {MAX_PET_AGE}, got {a}"
        ))),
        _ => Ok(()),
    }
}

pub fn validate_weight(weight: Option<f64>) -> Result<(), CoreError> {
    match weight {
        Some(w) if !w.is_finite() || w <= 0.0 => Err(CoreError::Validation(format!(
            "Weight must be a positive number, got {w}"
        ))),
        _ => Ok(()),
    }
}

/// Bot colours are six hex digits without a leading `#`.
pub fn validate_bot_color(color: &str) -> Result<(), CoreError> {
    if !BOT_COLOR_RE.is_match(color) {
        return Err(CoreError::Validation(format!(
            "Color must be a 6-digit hex code such as {DEFAULT_BOT_COLOR}, got '{color}'"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pet_name_required() {
        assert!(validate_pet_name("Tama").is_ok());
        assert!(validate_pet_name("  ").is_err());
        assert!(validate_pet_name(&"n".repeat(MAX_PET_NAME_LENGTH + 1)).is_err());
    }

    #[test]
    fn empty_bot_name_allowed() {
        assert!(validate_name_length("").is_ok());
    }

    #[test]
    fn age_bounds() {
        assert!(validate_age(None).is_ok());
        assert!(validate_age(Some(0)).is_ok());
        assert!(validate_age(Some(MAX_PET_AGE)).is_ok());
        assert!(validate_age(Some(-1)).is_err());
        assert!(validate_age(Some(MAX_PET_AGE + 1)).is_err());
    }

    #[test]
    fn weight_must_be_positive() {
        assert!(validate_weight(None).is_ok());
        assert!(validate_weight(Some(4.2)).is_ok());
        assert!(validate_weight(Some(0.0)).is_err());
        assert!(validate_weight(Some(-1.5)).is_err());
        assert!(validate_weight(Some(f64::NAN)).is_err());
    }

    #[test]
    fn bot_color_format() {
        assert!(validate_bot_color(DEFAULT_BOT_COLOR).is_ok());
        assert!(validate_bot_color("ff00aa").is_ok());
        assert!(validate_bot_color("#ff00aa").is_err());
        assert!(validate_bot_color("12345").is_err());
        assert!(validate_bot_color("GGGGGG").is_err());
    }
}
