//! Shared field checks used by the entity validators.

use crate::error::CoreError;

/// Require a non-blank value of at most `max` characters.
///
/// Length is counted in characters, matching PostgreSQL `VARCHAR(n)`.
pub fn validate_required_text(field: &str, value: &str, max: usize) -> Result<(), CoreError> {
    if value.trim().is_empty() {
        return Err(CoreError::Validation(format!("{field} cannot be empty")));
    }
    validate_max_chars(field, value, max)
}

/// Reject values longer than `max` characters or containing a NUL byte.
///
/// PostgreSQL text columns cannot store `\0`.
pub fn validate_max_chars(field: &str, value: &str, max: usize) -> Result<(), CoreError> {
    if value.contains('\0') {
        return Err(CoreError::Validation(format!(
            "{field} must not contain NUL characters"
        )));
    }
    let len = value.chars().count();
    if len > max {
        return Err(CoreError::Validation(format!(
            "{field} must be at most {max} characters, got {len}"
        )));
    }
    Ok(())
}
