use crate::types::DbId;

/// Domain error taxonomy shared by the service and transport layers.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// The entity does not exist or has been soft-deleted.
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    /// Malformed input or a broken creation invariant.
    #[error("Validation failed: {0}")]
    Validation(String),

    /// A unique-key or referential collision.
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Any other database failure. Any open transaction was dropped uncommitted.
    #[error("Persistence error: {0}")]
    Persistence(String),
}
