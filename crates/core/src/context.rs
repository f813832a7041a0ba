//! Context field constraints.

use crate::error::CoreError;
use crate::validation::validate_required_text;

/// Maximum length of a context name (`VARCHAR(60)`).
pub const MAX_CONTEXT_NAME_LENGTH: usize = 60;

/// Entity label used in `NotFound` errors and log lines.
pub const CONTEXT_ENTITY: &str = "Context";

/// Validate a context name: non-blank and within the column limit.
pub fn validate_context_name(name: &str) -> Result<(), CoreError> {
    validate_required_text("name", name, MAX_CONTEXT_NAME_LENGTH)
}
