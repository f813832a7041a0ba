//! Repository for the `roster.contexts` table.

use roster_core::pagination::PageRequest;
use roster_core::types::DbId;
use sqlx::PgConnection;

use crate::models::context::{Context, UpdateContext};
use crate::soft_delete::{mark_deleted, select_live, NOT_DELETED};

const TABLE: &str = "roster.contexts";

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, is_deleted, created_at, updated_at";

/// Provides CRUD operations for contexts.
pub struct ContextRepo;

impl ContextRepo {
    /// Insert a new context, returning the created row.
    pub async fn create(conn: &mut PgConnection, name: &str) -> Result<Context, sqlx::Error> {
        let query = format!("INSERT INTO {TABLE} (name) VALUES ($1) RETURNING {COLUMNS}");
        sqlx::query_as::<_, Context>(&query)
            .bind(name)
            .fetch_one(conn)
            .await
    }

    /// Find a context by ID. Excludes soft-deleted rows.
    pub async fn find_by_id(
        conn: &mut PgConnection,
        id: DbId,
    ) -> Result<Option<Context>, sqlx::Error> {
        let query = format!("{} AND id = $1", select_live(COLUMNS, TABLE));
        sqlx::query_as::<_, Context>(&query)
            .bind(id)
            .fetch_optional(conn)
            .await
    }

    /// Find a context by ID, including soft-deleted rows.
    pub async fn find_by_id_include_deleted(
        conn: &mut PgConnection,
        id: DbId,
    ) -> Result<Option<Context>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM {TABLE} WHERE id = $1");
        sqlx::query_as::<_, Context>(&query)
            .bind(id)
            .fetch_optional(conn)
            .await
    }

    /// List one page of contexts ordered by name. Excludes soft-deleted rows.
    pub async fn list(
        conn: &mut PgConnection,
        page: &PageRequest,
    ) -> Result<Vec<Context>, sqlx::Error> {
        let query = format!(
            "{} ORDER BY name ASC LIMIT $1 OFFSET $2",
            select_live(COLUMNS, TABLE)
        );
        sqlx::query_as::<_, Context>(&query)
            .bind(page.limit())
            .bind(page.offset())
            .fetch_all(conn)
            .await
    }

    /// Case-insensitive `ILIKE` search on name, ordered by name.
    /// Excludes soft-deleted rows.
    pub async fn search_by_name(
        conn: &mut PgConnection,
        pattern: &str,
        page: &PageRequest,
    ) -> Result<Vec<Context>, sqlx::Error> {
        let query = format!(
            "{} AND name ILIKE $1 ORDER BY name ASC LIMIT $2 OFFSET $3",
            select_live(COLUMNS, TABLE)
        );
        sqlx::query_as::<_, Context>(&query)
            .bind(pattern)
            .bind(page.limit())
            .bind(page.offset())
            .fetch_all(conn)
            .await
    }

    /// Of the given IDs, return those that name an existing context.
    ///
    /// Soft-deleted contexts count as existing: a user may still be linked
    /// to them.
    pub async fn existing_ids(
        conn: &mut PgConnection,
        ids: &[DbId],
    ) -> Result<Vec<DbId>, sqlx::Error> {
        let query = format!("SELECT id FROM {TABLE} WHERE id = ANY($1)");
        sqlx::query_scalar::<_, DbId>(&query)
            .bind(ids)
            .fetch_all(conn)
            .await
    }

    /// Update a context. Only a supplied, non-null name is applied.
    ///
    /// Returns `None` if no live row with the given `id` exists.
    pub async fn update(
        conn: &mut PgConnection,
        id: DbId,
        input: &UpdateContext,
    ) -> Result<Option<Context>, sqlx::Error> {
        let query = format!(
            "UPDATE {TABLE} SET name = COALESCE($2, name)
             WHERE id = $1 AND {NOT_DELETED}
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Context>(&query)
            .bind(id)
            .bind(input.name.value())
            .fetch_optional(conn)
            .await
    }

    /// Soft-delete a context by ID. Returns `true` if the row exists,
    /// whether or not it was already deleted.
    pub async fn soft_delete(conn: &mut PgConnection, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(&mark_deleted(TABLE))
            .bind(id)
            .execute(conn)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
