//! User lifecycle and context-membership synchronization.
//!
//! Membership rules:
//! - a user is created with at least one context;
//! - a non-empty `context_ids` on update replaces the whole set;
//! - context ids are resolved by existence alone, so soft-deleted contexts
//!   can still be linked; ids that match no row are rejected.

use std::collections::HashMap;

use roster_core::error::CoreError;
use roster_core::pagination::PageRequest;
use roster_core::patch::Patch;
use roster_core::search::contains_pattern;
use roster_core::types::DbId;
use roster_core::user::{
    dedup_ids, ensure_all_resolved, validate_context_ids, validate_email, validate_full_name,
    validate_password_hash, validate_phone, validate_user_name, USER_ENTITY,
};
use sqlx::{PgConnection, PgPool};

use crate::error::{classify, ServiceResult};
use crate::models::context::ContextSummary;
use crate::models::user::{CreateUser, UpdateUser, User, UserView};
use crate::repositories::{ContextRepo, UserContextRepo, UserRepo};

fn not_found(id: DbId) -> CoreError {
    CoreError::NotFound {
        entity: USER_ENTITY,
        id,
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn validate_create(input: &CreateUser) -> Result<(), CoreError> {
    validate_user_name(&input.name)?;
    validate_full_name(&input.full_name)?;
    validate_email(&input.email)?;
    if let Some(phone) = &input.phone {
        validate_phone(phone)?;
    }
    validate_password_hash(&input.password_hash)
}

fn validate_update(input: &UpdateUser) -> Result<(), CoreError> {
    if let Patch::Value(name) = &input.name {
        validate_user_name(name)?;
    }
    if let Patch::Value(full_name) = &input.full_name {
        validate_full_name(full_name)?;
    }
    if let Patch::Value(email) = &input.email {
        validate_email(email)?;
    }
    if let Patch::Value(phone) = &input.phone {
        validate_phone(phone)?;
    }
    if let Patch::Value(hash) = &input.password_hash {
        validate_password_hash(hash)?;
    }
    Ok(())
}

/// De-duplicate `requested` and check every id names an existing context.
async fn resolve_context_ids(
    conn: &mut PgConnection,
    requested: &[DbId],
) -> ServiceResult<Vec<DbId>> {
    let ids = dedup_ids(requested);
    validate_context_ids(&ids)?;
    let found = ContextRepo::existing_ids(conn, &ids)
        .await
        .map_err(classify)?;
    ensure_all_resolved(&ids, &found)?;
    Ok(ids)
}

/// Attach context summaries to each user, preserving the order of `users`.
async fn with_contexts(conn: &mut PgConnection, users: Vec<User>) -> ServiceResult<Vec<UserView>> {
    if users.is_empty() {
        return Ok(Vec::new());
    }

    let ids: Vec<DbId> = users.iter().map(|u| u.id).collect();
    let rows = UserContextRepo::contexts_for_users(conn, &ids)
        .await
        .map_err(classify)?;

    let mut by_user: HashMap<DbId, Vec<ContextSummary>> = HashMap::with_capacity(users.len());
    for row in rows {
        by_user.entry(row.user_id).or_default().push(ContextSummary {
            id: row.id,
            name: row.name,
        });
    }

    Ok(users
        .into_iter()
        .map(|user| {
            let contexts = by_user.remove(&user.id).unwrap_or_default();
            UserView::new(user, contexts)
        })
        .collect())
}

async fn single_view(conn: &mut PgConnection, user: User) -> ServiceResult<UserView> {
    let user_id = user.id;
    with_contexts(conn, vec![user])
        .await?
        .pop()
        .ok_or_else(|| not_found(user_id))
}

// ---------------------------------------------------------------------------
// Service
// ---------------------------------------------------------------------------

pub struct UserService;

impl UserService {
    /// Create a user together with its full context set.
    ///
    /// Fails with `Validation` if `context_ids` is empty or names an
    /// unknown context, and with `Conflict` if the email is taken. Nothing
    /// is persisted on failure.
    pub async fn create(pool: &PgPool, input: &CreateUser) -> ServiceResult<UserView> {
        validate_create(input)?;
        validate_context_ids(&input.context_ids)?;

        let mut tx = pool.begin().await.map_err(classify)?;
        let context_ids = resolve_context_ids(&mut *tx, &input.context_ids).await?;

        let user = UserRepo::create(&mut *tx, input).await.map_err(classify)?;
        UserContextRepo::attach(&mut *tx, user.id, &context_ids)
            .await
            .map_err(classify)?;
        let view = single_view(&mut *tx, user).await?;
        tx.commit().await.map_err(classify)?;

        tracing::info!(
            user_id = %view.id,
            contexts = view.contexts.len(),
            "User created"
        );
        Ok(view)
    }

    /// One page of live users ordered by name, each with its contexts.
    pub async fn list(pool: &PgPool, page: &PageRequest) -> ServiceResult<Vec<UserView>> {
        tracing::debug!(page = page.page(), limit = page.limit(), "Listing users");
        let mut conn = pool.acquire().await.map_err(classify)?;
        let users = UserRepo::list(&mut *conn, page).await.map_err(classify)?;
        with_contexts(&mut *conn, users).await
    }

    pub async fn get_by_id(pool: &PgPool, id: DbId) -> ServiceResult<UserView> {
        let mut conn = pool.acquire().await.map_err(classify)?;
        let user = UserRepo::find_by_id(&mut *conn, id)
            .await
            .map_err(classify)?
            .ok_or_else(|| not_found(id))?;
        single_view(&mut *conn, user).await
    }

    /// Case-insensitive substring search over live user names.
    pub async fn get_by_name(
        pool: &PgPool,
        term: &str,
        page: &PageRequest,
    ) -> ServiceResult<Vec<UserView>> {
        let pattern = contains_pattern(term)?;
        tracing::debug!(
            %pattern,
            page = page.page(),
            limit = page.limit(),
            "Searching users by name"
        );
        let mut conn = pool.acquire().await.map_err(classify)?;
        let users = UserRepo::search_by_name(&mut *conn, &pattern, page)
            .await
            .map_err(classify)?;
        with_contexts(&mut *conn, users).await
    }

    /// Partially update a live user and, when `context_ids` is non-empty,
    /// replace its context set.
    pub async fn update(pool: &PgPool, id: DbId, input: &UpdateUser) -> ServiceResult<UserView> {
        validate_update(input)?;

        let mut tx = pool.begin().await.map_err(classify)?;
        let user = UserRepo::update(&mut *tx, id, input)
            .await
            .map_err(classify)?
            .ok_or_else(|| not_found(id))?;

        if let Some(requested) = input.context_ids.as_deref().filter(|ids| !ids.is_empty()) {
            let context_ids = resolve_context_ids(&mut *tx, requested).await?;
            UserContextRepo::replace_for_user(&mut *tx, id, &context_ids)
                .await
                .map_err(classify)?;
        }

        let view = single_view(&mut *tx, user).await?;
        tx.commit().await.map_err(classify)?;

        tracing::info!(user_id = %id, "User updated");
        Ok(view)
    }

    /// Soft-delete a user. Deleting an already-deleted user succeeds.
    /// Association rows are not touched.
    pub async fn delete(pool: &PgPool, id: DbId) -> ServiceResult<DbId> {
        let mut tx = pool.begin().await.map_err(classify)?;
        let exists = UserRepo::soft_delete(&mut *tx, id)
            .await
            .map_err(classify)?;
        if !exists {
            return Err(not_found(id));
        }
        tx.commit().await.map_err(classify)?;

        tracing::info!(user_id = %id, "User soft-deleted");
        Ok(id)
    }
}
