//! Repository for the `roster.users` table.

use roster_core::pagination::PageRequest;
use roster_core::types::DbId;
use sqlx::PgConnection;

use crate::models::user::{CreateUser, UpdateUser, User};
use crate::soft_delete::{mark_deleted, select_live, NOT_DELETED};

const TABLE: &str = "roster.users";

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, full_name, email, phone, is_active, password_hash, \
                        is_deleted, created_at, updated_at";

/// Provides CRUD operations for users. Context membership lives in
/// [`UserContextRepo`](super::UserContextRepo).
pub struct UserRepo;

impl UserRepo {
    /// Insert a new user, returning the created row.
    pub async fn create(conn: &mut PgConnection, input: &CreateUser) -> Result<User, sqlx::Error> {
        let query = format!(
            "INSERT INTO {TABLE} (name, full_name, email, phone, is_active, password_hash)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(&input.name)
            .bind(&input.full_name)
            .bind(&input.email)
            .bind(&input.phone)
            .bind(input.is_active)
            .bind(&input.password_hash)
            .fetch_one(conn)
            .await
    }

    /// Find a user by ID. Excludes soft-deleted rows.
    pub async fn find_by_id(conn: &mut PgConnection, id: DbId) -> Result<Option<User>, sqlx::Error> {
        let query = format!("{} AND id = $1", select_live(COLUMNS, TABLE));
        sqlx::query_as::<_, User>(&query)
            .bind(id)
            .fetch_optional(conn)
            .await
    }

    /// Find a user by ID, including soft-deleted rows.
    pub async fn find_by_id_include_deleted(
        conn: &mut PgConnection,
        id: DbId,
    ) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM {TABLE} WHERE id = $1");
        sqlx::query_as::<_, User>(&query)
            .bind(id)
            .fetch_optional(conn)
            .await
    }

    /// List one page of users ordered by name (ties broken by id).
    /// Excludes soft-deleted rows.
    pub async fn list(conn: &mut PgConnection, page: &PageRequest) -> Result<Vec<User>, sqlx::Error> {
        let query = format!(
            "{} ORDER BY name ASC, id ASC LIMIT $1 OFFSET $2",
            select_live(COLUMNS, TABLE)
        );
        sqlx::query_as::<_, User>(&query)
            .bind(page.limit())
            .bind(page.offset())
            .fetch_all(conn)
            .await
    }

    /// Case-insensitive `ILIKE` search on name. Excludes soft-deleted rows.
    pub async fn search_by_name(
        conn: &mut PgConnection,
        pattern: &str,
        page: &PageRequest,
    ) -> Result<Vec<User>, sqlx::Error> {
        let query = format!(
            "{} AND name ILIKE $1 ORDER BY name ASC, id ASC LIMIT $2 OFFSET $3",
            select_live(COLUMNS, TABLE)
        );
        sqlx::query_as::<_, User>(&query)
            .bind(pattern)
            .bind(page.limit())
            .bind(page.offset())
            .fetch_all(conn)
            .await
    }

    /// Update a user. Only supplied, non-null fields are applied, except
    /// `phone`, which an explicit `null` clears.
    ///
    /// Returns `None` if no live row with the given `id` exists.
    pub async fn update(
        conn: &mut PgConnection,
        id: DbId,
        input: &UpdateUser,
    ) -> Result<Option<User>, sqlx::Error> {
        let phone = input.phone.nullable_change();
        let query = format!(
            "UPDATE {TABLE} SET
                name = COALESCE($2, name),
                full_name = COALESCE($3, full_name),
                email = COALESCE($4, email),
                phone = CASE WHEN $5 THEN $6 ELSE phone END,
                is_active = COALESCE($7, is_active),
                password_hash = COALESCE($8, password_hash)
             WHERE id = $1 AND {NOT_DELETED}
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(id)
            .bind(input.name.value())
            .bind(input.full_name.value())
            .bind(input.email.value())
            .bind(phone.is_some())
            .bind(phone.flatten())
            .bind(input.is_active.value().copied())
            .bind(input.password_hash.value())
            .fetch_optional(conn)
            .await
    }

    /// Soft-delete a user by ID. Returns `true` if the row exists, whether
    /// or not it was already deleted. Association rows are left in place.
    pub async fn soft_delete(conn: &mut PgConnection, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(&mark_deleted(TABLE))
            .bind(id)
            .execute(conn)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
