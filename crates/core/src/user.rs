//! User field constraints and context-membership rules.

use std::collections::HashSet;

use validator::ValidateEmail;

use crate::error::CoreError;
use crate::types::DbId;
use crate::validation::{validate_max_chars, validate_required_text};

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

pub const MAX_USER_NAME_LENGTH: usize = 60;
pub const MAX_FULL_NAME_LENGTH: usize = 120;
pub const MAX_EMAIL_LENGTH: usize = 255;
pub const MAX_PHONE_LENGTH: usize = 20;
pub const MAX_PASSWORD_HASH_LENGTH: usize = 128;

/// Entity label used in `NotFound` errors and log lines.
pub const USER_ENTITY: &str = "User";

/// Message returned when a user would end up with no contexts.
pub const CONTEXT_REQUIRED_MESSAGE: &str =
    "at least one context must be supplied to associate the user with";

// ---------------------------------------------------------------------------
// Field validation
// ---------------------------------------------------------------------------

pub fn validate_user_name(name: &str) -> Result<(), CoreError> {
    validate_required_text("name", name, MAX_USER_NAME_LENGTH)
}

pub fn validate_full_name(full_name: &str) -> Result<(), CoreError> {
    validate_required_text("full_name", full_name, MAX_FULL_NAME_LENGTH)
}

/// Validate an email address: within the column limit and well-formed.
pub fn validate_email(email: &str) -> Result<(), CoreError> {
    validate_required_text("email", email, MAX_EMAIL_LENGTH)?;
    if !email.validate_email() {
        return Err(CoreError::Validation(format!(
            "'{email}' is not a valid email address"
        )));
    }
    Ok(())
}

pub fn validate_phone(phone: &str) -> Result<(), CoreError> {
    validate_max_chars("phone", phone, MAX_PHONE_LENGTH)
}

/// The hash is opaque to this service; only presence and length are checked.
pub fn validate_password_hash(hash: &str) -> Result<(), CoreError> {
    validate_required_text("password_hash", hash, MAX_PASSWORD_HASH_LENGTH)
}

// ---------------------------------------------------------------------------
// Context membership
// ---------------------------------------------------------------------------

/// A user must be created with at least one context.
pub fn validate_context_ids(ids: &[DbId]) -> Result<(), CoreError> {
    if ids.is_empty() {
        return Err(CoreError::Validation(CONTEXT_REQUIRED_MESSAGE.to_string()));
    }
    Ok(())
}

/// Remove repeated ids, keeping the first occurrence of each.
pub fn dedup_ids(ids: &[DbId]) -> Vec<DbId> {
    let mut seen = HashSet::with_capacity(ids.len());
    ids.iter().copied().filter(|id| seen.insert(*id)).collect()
}

/// Ids from `requested` that do not appear in `found`, in request order.
pub fn missing_ids(requested: &[DbId], found: &[DbId]) -> Vec<DbId> {
    let found: HashSet<&DbId> = found.iter().collect();
    requested
        .iter()
        .filter(|id| !found.contains(id))
        .copied()
        .collect()
}

/// Fail with a validation error listing context ids that resolved to nothing.
pub fn ensure_all_resolved(requested: &[DbId], found: &[DbId]) -> Result<(), CoreError> {
    let missing = missing_ids(requested, found);
    if missing.is_empty() {
        return Ok(());
    }
    let listed = missing
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ");
    Err(CoreError::Validation(format!("Unknown context ids: {listed}")))
}
