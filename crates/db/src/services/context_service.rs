//! Context lifecycle: create, read, search, rename, soft-delete.

use roster_core::context::{validate_context_name, CONTEXT_ENTITY};
use roster_core::error::CoreError;
use roster_core::pagination::PageRequest;
use roster_core::patch::Patch;
use roster_core::search::contains_pattern;
use roster_core::types::DbId;
use sqlx::PgPool;

use crate::error::{classify, ServiceResult};
use crate::models::context::{ContextView, CreateContext, UpdateContext};
use crate::repositories::ContextRepo;

fn not_found(id: DbId) -> CoreError {
    CoreError::NotFound {
        entity: CONTEXT_ENTITY,
        id,
    }
}

pub struct ContextService;

impl ContextService {
    /// Create a context. A name already used by any row, deleted or not,
    /// fails with `Conflict`.
    pub async fn create(pool: &PgPool, input: &CreateContext) -> ServiceResult<ContextView> {
        validate_context_name(&input.name)?;

        let mut tx = pool.begin().await.map_err(classify)?;
        let context = ContextRepo::create(&mut *tx, &input.name)
            .await
            .map_err(classify)?;
        tx.commit().await.map_err(classify)?;

        tracing::info!(context_id = %context.id, name = %context.name, "Context created");
        Ok(context.into())
    }

    /// One page of live contexts ordered by name.
    pub async fn list(pool: &PgPool, page: &PageRequest) -> ServiceResult<Vec<ContextView>> {
        tracing::debug!(page = page.page(), limit = page.limit(), "Listing contexts");
        let mut conn = pool.acquire().await.map_err(classify)?;
        let contexts = ContextRepo::list(&mut *conn, page).await.map_err(classify)?;
        Ok(contexts.into_iter().map(ContextView::from).collect())
    }

    pub async fn get_by_id(pool: &PgPool, id: DbId) -> ServiceResult<ContextView> {
        let mut conn = pool.acquire().await.map_err(classify)?;
        ContextRepo::find_by_id(&mut *conn, id)
            .await
            .map_err(classify)?
            .map(ContextView::from)
            .ok_or_else(|| not_found(id))
    }

    /// Case-insensitive substring search over live context names.
    pub async fn get_by_name(
        pool: &PgPool,
        term: &str,
        page: &PageRequest,
    ) -> ServiceResult<Vec<ContextView>> {
        let pattern = contains_pattern(term)?;
        tracing::debug!(
            %pattern,
            page = page.page(),
            limit = page.limit(),
            "Searching contexts by name"
        );
        let mut conn = pool.acquire().await.map_err(classify)?;
        let contexts = ContextRepo::search_by_name(&mut *conn, &pattern, page)
            .await
            .map_err(classify)?;
        Ok(contexts.into_iter().map(ContextView::from).collect())
    }

    /// Rename a live context. Only `name` is ever touched.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateContext,
    ) -> ServiceResult<ContextView> {
        if let Patch::Value(name) = &input.name {
            validate_context_name(name)?;
        }

        let mut tx = pool.begin().await.map_err(classify)?;
        let context = ContextRepo::update(&mut *tx, id, input)
            .await
            .map_err(classify)?
            .ok_or_else(|| not_found(id))?;
        tx.commit().await.map_err(classify)?;

        tracing::info!(context_id = %id, "Context updated");
        Ok(context.into())
    }

    /// Soft-delete a context. Deleting an already-deleted context succeeds.
    /// Users linked to it keep their association rows.
    pub async fn delete(pool: &PgPool, id: DbId) -> ServiceResult<DbId> {
        let mut tx = pool.begin().await.map_err(classify)?;
        let exists = ContextRepo::soft_delete(&mut *tx, id)
            .await
            .map_err(classify)?;
        if !exists {
            return Err(not_found(id));
        }
        tx.commit().await.map_err(classify)?;

        tracing::info!(context_id = %id, "Context soft-deleted");
        Ok(id)
    }
}
