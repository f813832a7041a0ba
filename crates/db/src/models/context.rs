//! Context entity model and DTOs.

use roster_core::patch::Patch;
use roster_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `roster.contexts` table.
#[derive(Debug, Clone, FromRow)]
pub struct Context {
    pub id: DbId,
    pub name: String,
    pub is_deleted: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Context representation for API responses.
#[derive(Debug, Clone, Serialize)]
pub struct ContextView {
    pub id: DbId,
    pub name: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl From<Context> for ContextView {
    fn from(context: Context) -> Self {
        Self {
            id: context.id,
            name: context.name,
            created_at: context.created_at,
            updated_at: context.updated_at,
        }
    }
}

/// Lightweight context info nested inside a user view.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct ContextSummary {
    pub id: DbId,
    pub name: String,
}

/// DTO for creating a new context.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateContext {
    pub name: String,
}

/// DTO for updating a context. Only the name is mutable.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateContext {
    #[serde(default)]
    pub name: Patch<String>,
}
