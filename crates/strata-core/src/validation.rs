//! Validation utilities.

use crate::StrataError;
use validator::ValidationError;

/// Converts a single `validator::ValidationError` into a `StrataError`.
#[must_use]
pub fn validation_error_to_strata_error(field: &str, error: &ValidationError) -> StrataError {
    let message = error
        .message
        .as_ref()
        .map_or_else(|| error.code.to_string(), ToString::to_string);
    StrataError::Validation(format!("{field}: {message}"))
}

/// Common validation functions.
pub mod rules {
    use validator::ValidationError;

    /// Maximum length of a display name, counted in characters.
    pub const MAX_NAME_LENGTH: usize = 50;

    /// Validates that a string is not blank (not empty after trimming).
    pub fn not_blank(value: &str) -> Result<(), ValidationError> {
        if value.trim().is_empty() {
            return Err(ValidationError::new("not_blank"));
        }
        Ok(())
    }

    /// Returns true for ASCII control characters other than whitespace.
    #[must_use]
    pub fn is_forbidden_control(c: char) -> bool {
        c == '\u{7f}' || (c.is_ascii_control() && !c.is_whitespace())
    }

    /// Validates an already trimmed display name.
    pub fn valid_display_name(name: &str) -> Result<(), ValidationError> {
        not_blank(name)?;
        if name.chars().count() > MAX_NAME_LENGTH {
            return Err(ValidationError::new("name_too_long"));
        }
        if name.chars().any(is_forbidden_control) {
            return Err(ValidationError::new("name_control_characters"));
        }
        Ok(())
    }
}
