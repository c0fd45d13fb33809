//! Repository for the `favorites` table.

use castboard_core::types::DbId;
use sqlx::PgPool;

use crate::models::casting_call::CastingCall;
use crate::models::favorite::Favorite;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, user_id, casting_call_id, created_at";

/// Provides bookmark operations for favorites.
pub struct FavoriteRepo;

impl FavoriteRepo {
    /// Find the favorite for a (user, casting call) pair.
    pub async fn find(
        pool: &PgPool,
        user_id: DbId,
        casting_call_id: DbId,
    ) -> Result<Option<Favorite>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM favorites WHERE user_id = $1 AND casting_call_id = $2"
        );
        sqlx::query_as::<_, Favorite>(&query)
            .bind(user_id)
            .bind(casting_call_id)
            .fetch_optional(pool)
            .await
    }

    /// Insert a favorite. A concurrent duplicate is ignored.
    ///
    /// Returns `true` if a new row was inserted.
    pub async fn add(
        pool: &PgPool,
        user_id: DbId,
        casting_call_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "INSERT INTO favorites (user_id, casting_call_id)
             VALUES ($1, $2)
             ON CONFLICT ON CONSTRAINT uq_favorites_user_casting DO NOTHING",
        )
        .bind(user_id)
        .bind(casting_call_id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Remove a favorite. Returns `true` if a row was deleted.
    pub async fn remove(
        pool: &PgPool,
        user_id: DbId,
        casting_call_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let result =
            sqlx::query("DELETE FROM favorites WHERE user_id = $1 AND casting_call_id = $2")
                .bind(user_id)
                .bind(casting_call_id)
                .execute(pool)
                .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Flip the favorite state of a pair. Returns the new state.
    ///
    /// Deleting first means a double toggle always lands back on "absent".
    pub async fn toggle(
        pool: &PgPool,
        user_id: DbId,
        casting_call_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        if Self::remove(pool, user_id, casting_call_id).await? {
            return Ok(false);
        }
        Self::add(pool, user_id, casting_call_id).await?;
        Ok(true)
    }

    /// The user's favorited casting calls, most recently favorited first.
    pub async fn list_casting_calls_for_user(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Vec<CastingCall>, sqlx::Error> {
        sqlx::query_as::<_, CastingCall>(
            "SELECT c.id, c.title, c.role, c.type, c.description, c.image, c.deadline,
                    c.location, c.roles, c.min_age, c.max_age, c.gender, c.created_by,
                    c.status, c.is_verified, c.created_at, c.updated_at
             FROM favorites f
             JOIN casting_calls c ON c.id = f.casting_call_id
             WHERE f.user_id = $1
             ORDER BY f.created_at DESC, f.id DESC",
        )
        .bind(user_id)
        .fetch_all(pool)
        .await
    }
}
