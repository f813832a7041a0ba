//! Name search patterns.

use crate::error::CoreError;

/// Build an `ILIKE` pattern that matches `input` anywhere in the column.
///
/// The input is trimmed and wrapped in `%`. Wildcards the caller typed
/// (`%`, `_`) are kept, so `"a_n"` still behaves as a pattern.
pub fn contains_pattern(input: &str) -> Result<String, CoreError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(CoreError::Validation(
            "Search term cannot be empty".to_string(),
        ));
    }
    Ok(format!("%{trimmed}%"))
}
