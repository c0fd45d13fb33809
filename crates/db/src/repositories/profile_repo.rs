//! Repository for the `profiles` table.

use castboard_core::admin_request::{REQUEST_APPROVED, REQUEST_PENDING};
use castboard_core::roles::ROLE_ADMIN;
use castboard_core::types::DbId;
use sqlx::PgPool;

use crate::models::profile::{CreateProfile, Profile, UpdateProfile};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, email, password_hash, full_name, avatar_url, role, \
                        admin_request_status, admin_request_reason, admin_request_date, \
                        created_at, updated_at";

/// Provides CRUD operations for profiles and their admin requests.
pub struct ProfileRepo;

impl ProfileRepo {
    /// Insert a new profile with the default `user` role, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateProfile) -> Result<Profile, sqlx::Error> {
        let query = format!(
            "INSERT INTO profiles (email, password_hash, full_name)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Profile>(&query)
            .bind(&input.email)
            .bind(&input.password_hash)
            .bind(&input.full_name)
            .fetch_one(pool)
            .await
    }

    /// Find a profile by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Profile>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM profiles WHERE id = $1");
        sqlx::query_as::<_, Profile>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a profile by email (case-insensitive).
    pub async fn find_by_email(pool: &PgPool, email: &str) -> Result<Option<Profile>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM profiles WHERE lower(email) = lower($1)");
        sqlx::query_as::<_, Profile>(&query)
            .bind(email)
            .fetch_optional(pool)
            .await
    }

    /// Look up only the stored role of a profile.
    pub async fn find_role(pool: &PgPool, id: DbId) -> Result<Option<String>, sqlx::Error> {
        sqlx::query_scalar::<_, String>("SELECT role FROM profiles WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Apply a self-edit. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateProfile,
    ) -> Result<Option<Profile>, sqlx::Error> {
        let query = format!(
            "UPDATE profiles SET
                full_name = COALESCE($2, full_name),
                avatar_url = COALESCE($3, avatar_url)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Profile>(&query)
            .bind(id)
            .bind(&input.full_name)
            .bind(&input.avatar_url)
            .fetch_optional(pool)
            .await
    }

    /// Record a new admin-access request: status `pending`, reason, and date `NOW()`.
    pub async fn request_admin_role(
        pool: &PgPool,
        id: DbId,
        reason: &str,
    ) -> Result<Option<Profile>, sqlx::Error> {
        let query = format!(
            "UPDATE profiles SET
                admin_request_status = $2,
                admin_request_reason = $3,
                admin_request_date = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Profile>(&query)
            .bind(id)
            .bind(REQUEST_PENDING)
            .bind(reason)
            .fetch_optional(pool)
            .await
    }

    /// Profiles with a pending admin request, oldest request first.
    pub async fn list_pending_admin_requests(pool: &PgPool) -> Result<Vec<Profile>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM profiles
             WHERE admin_request_status = $1
             ORDER BY admin_request_date ASC, id ASC"
        );
        sqlx::query_as::<_, Profile>(&query)
            .bind(REQUEST_PENDING)
            .fetch_all(pool)
            .await
    }

    /// Record an admin's decision on a pending request.
    ///
    /// Approval also grants the `admin` role. Only rows whose request is still
    /// pending are touched; returns `None` otherwise.
    pub async fn decide_admin_request(
        pool: &PgPool,
        id: DbId,
        decision: &str,
    ) -> Result<Option<Profile>, sqlx::Error> {
        let query = format!(
            "UPDATE profiles SET
                admin_request_status = $2,
                role = CASE WHEN $2 = $3 THEN $4 ELSE role END
             WHERE id = $1 AND admin_request_status = $5
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Profile>(&query)
            .bind(id)
            .bind(decision)
            .bind(REQUEST_APPROVED)
            .bind(ROLE_ADMIN)
            .bind(REQUEST_PENDING)
            .fetch_optional(pool)
            .await
    }

    /// Set a profile's role directly. Returns `None` if no row with `id` exists.
    pub async fn set_role(
        pool: &PgPool,
        id: DbId,
        role: &str,
    ) -> Result<Option<Profile>, sqlx::Error> {
        let query = format!("UPDATE profiles SET role = $2 WHERE id = $1 RETURNING {COLUMNS}");
        sqlx::query_as::<_, Profile>(&query)
            .bind(id)
            .bind(role)
            .fetch_optional(pool)
            .await
    }
}
