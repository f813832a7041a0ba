//! Repository for the `roster.user_context` association table.

use roster_core::types::DbId;
use sqlx::PgConnection;

use crate::models::user::UserContextRow;

const TABLE: &str = "roster.user_context";

/// Manages the many-to-many link between users and contexts.
pub struct UserContextRepo;

impl UserContextRepo {
    /// Link a user to each of the given contexts. Existing links are kept.
    ///
    /// Returns the number of new links.
    pub async fn attach(
        conn: &mut PgConnection,
        user_id: DbId,
        context_ids: &[DbId],
    ) -> Result<u64, sqlx::Error> {
        let query = format!(
            "INSERT INTO {TABLE} (user_id, context_id)
             SELECT $1, UNNEST($2::uuid[])
             ON CONFLICT (user_id, context_id) DO NOTHING"
        );
        let result = sqlx::query(&query)
            .bind(user_id)
            .bind(context_ids)
            .execute(conn)
            .await?;
        Ok(result.rows_affected())
    }

    /// Make `context_ids` the user's complete context set.
    ///
    /// Links outside the set are removed, missing ones are added. Run inside
    /// a transaction so readers never see a half-replaced set.
    pub async fn replace_for_user(
        conn: &mut PgConnection,
        user_id: DbId,
        context_ids: &[DbId],
    ) -> Result<(), sqlx::Error> {
        let query =
            format!("DELETE FROM {TABLE} WHERE user_id = $1 AND NOT (context_id = ANY($2))");
        let detached = sqlx::query(&query)
            .bind(user_id)
            .bind(context_ids)
            .execute(&mut *conn)
            .await?
            .rows_affected();

        let attached = Self::attach(conn, user_id, context_ids).await?;
        tracing::debug!(%user_id, detached, attached, "Replaced user context set");
        Ok(())
    }

    /// Contexts linked to any of the given users, ordered by context name.
    ///
    /// Soft-deleted contexts are included: membership is reported as stored.
    pub async fn contexts_for_users(
        conn: &mut PgConnection,
        user_ids: &[DbId],
    ) -> Result<Vec<UserContextRow>, sqlx::Error> {
        let query = format!(
            "SELECT uc.user_id, c.id, c.name
             FROM {TABLE} uc
             JOIN roster.contexts c ON c.id = uc.context_id
             WHERE uc.user_id = ANY($1)
             ORDER BY c.name ASC"
        );
        sqlx::query_as::<_, UserContextRow>(&query)
            .bind(user_ids)
            .fetch_all(conn)
            .await
    }
}
