//! User entity model and DTOs.

use roster_core::patch::Patch;
use roster_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::context::ContextSummary;

/// Full user row from the `roster.users` table.
///
/// Contains the password hash -- NEVER serialize this to API responses directly.
/// Use [`UserView`] for external-facing output.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: DbId,
    pub name: String,
    pub full_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub is_active: bool,
    pub password_hash: String,
    pub is_deleted: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Safe user representation for API responses (no password hash), with the
/// contexts the user belongs to ordered by name.
#[derive(Debug, Clone, Serialize)]
pub struct UserView {
    pub id: DbId,
    pub name: String,
    pub full_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub contexts: Vec<ContextSummary>,
}

impl UserView {
    pub fn new(user: User, contexts: Vec<ContextSummary>) -> Self {
        Self {
            id: user.id,
            name: user.name,
            full_name: user.full_name,
            email: user.email,
            phone: user.phone,
            is_active: user.is_active,
            created_at: user.created_at,
            updated_at: user.updated_at,
            contexts,
        }
    }
}

/// A `(user, context)` pair from the association table, joined with the
/// context name.
#[derive(Debug, Clone, FromRow)]
pub struct UserContextRow {
    pub user_id: DbId,
    pub id: DbId,
    pub name: String,
}

/// DTO for creating a new user.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateUser {
    pub name: String,
    pub full_name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    /// Defaults to `true` if omitted.
    #[serde(default = "default_active")]
    pub is_active: bool,
    pub password_hash: String,
    /// Must name at least one context.
    #[serde(default)]
    pub context_ids: Vec<DbId>,
}

fn default_active() -> bool {
    true
}

/// DTO for updating an existing user. Every field is optional.
///
/// `phone` is the only nullable column: an explicit `null` clears it. For
/// the other fields `null` means the same as omitting the key.
///
/// A non-empty `context_ids` replaces the user's whole context set; an
/// empty or missing list leaves it untouched.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateUser {
    #[serde(default)]
    pub name: Patch<String>,
    #[serde(default)]
    pub full_name: Patch<String>,
    #[serde(default)]
    pub email: Patch<String>,
    #[serde(default)]
    pub phone: Patch<String>,
    #[serde(default)]
    pub is_active: Patch<bool>,
    #[serde(default)]
    pub password_hash: Patch<String>,
    #[serde(default)]
    pub context_ids: Option<Vec<DbId>>,
}
