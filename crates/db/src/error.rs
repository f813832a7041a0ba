//! Conversion of `sqlx` failures into the domain error taxonomy.

use roster_core::error::CoreError;

/// Result type returned by every service operation.
pub type ServiceResult<T> = Result<T, CoreError>;

// PostgreSQL SQLSTATE codes.
const UNIQUE_VIOLATION: &str = "23505";
const FOREIGN_KEY_VIOLATION: &str = "23503";
const NOT_NULL_VIOLATION: &str = "23502";
const CHECK_VIOLATION: &str = "23514";
const STRING_DATA_RIGHT_TRUNCATION: &str = "22001";
const CHARACTER_NOT_IN_REPERTOIRE: &str = "22021";

/// Classify a database error at the service boundary.
///
/// - Unique violations become [`CoreError::Conflict`] naming the constraint.
/// - Foreign-key violations become [`CoreError::Conflict`].
/// - Not-null, check, over-long and unencodable values become
///   [`CoreError::Validation`].
/// - Everything else is logged here, once, and becomes
///   [`CoreError::Persistence`]. Callers must not log it again.
pub fn classify(err: sqlx::Error) -> CoreError {
    if let sqlx::Error::Database(db_err) = &err {
        let constraint = db_err.constraint().unwrap_or("unknown");
        match db_err.code().as_deref() {
            Some(UNIQUE_VIOLATION) => return CoreError::Conflict(conflict_message(constraint)),
            Some(FOREIGN_KEY_VIOLATION) => {
                return CoreError::Conflict(format!(
                    "Referenced row does not exist: {constraint}"
                ))
            }
            Some(
                NOT_NULL_VIOLATION
                | CHECK_VIOLATION
                | STRING_DATA_RIGHT_TRUNCATION
                | CHARACTER_NOT_IN_REPERTOIRE,
            ) => {
                return CoreError::Validation(db_err.message().to_string())
            }
            _ => {}
        }
    }

    tracing::error!(error = %err, "Database error");
    CoreError::Persistence(err.to_string())
}

fn conflict_message(constraint: &str) -> String {
    match constraint {
        "uq_context_name" => "A context with this name already exists".to_string(),
        "uq_user_email" => "A user with this email already exists".to_string(),
        "uq_user_context" => "The user is already associated with this context".to_string(),
        other => format!("Duplicate value violates unique constraint: {other}"),
    }
}
