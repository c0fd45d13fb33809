//! Repository for the `casting_calls` table.

use castboard_core::casting::{page_offset, PAGE_SIZE, STATUS_APPROVED, STATUS_PENDING};
use castboard_core::types::DbId;
use sqlx::PgPool;

use crate::models::casting_call::{
    CastingCall, CastingCallFilter, CreateCastingCall, PendingCastingCall,
};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, role, type, description, image, deadline, location, roles, \
                        min_age, max_age, gender, created_by, status, is_verified, \
                        created_at, updated_at";

/// Same columns qualified with the `c` alias, for joins.
const C_COLUMNS: &str = "c.id, c.title, c.role, c.type, c.description, c.image, c.deadline, \
                          c.location, c.roles, c.min_age, c.max_age, c.gender, c.created_by, \
                          c.status, c.is_verified, c.created_at, c.updated_at";

/// Dynamically bound listing parameter.
enum BindValue {
    Int(i32),
    Text(String),
}

/// Provides CRUD and listing operations for casting calls.
pub struct CastingCallRepo;

impl CastingCallRepo {
    /// Insert a new casting call in `pending` state, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateCastingCall,
    ) -> Result<CastingCall, sqlx::Error> {
        let query = format!(
            "INSERT INTO casting_calls
                (title, role, type, description, image, deadline, location, roles,
                 min_age, max_age, gender, created_by, status)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, CastingCall>(&query)
            .bind(&input.title)
            .bind(&input.role)
            .bind(&input.casting_type)
            .bind(&input.description)
            .bind(&input.image)
            .bind(input.deadline)
            .bind(&input.location)
            .bind(input.roles)
            .bind(input.min_age)
            .bind(input.max_age)
            .bind(&input.gender)
            .bind(input.created_by)
            .bind(STATUS_PENDING)
            .fetch_one(pool)
            .await
    }

    /// Find a casting call by ID, regardless of status.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<CastingCall>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM casting_calls WHERE id = $1");
        sqlx::query_as::<_, CastingCall>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Whether a casting call with the given ID exists.
    pub async fn exists(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM casting_calls WHERE id = $1)")
            .bind(id)
            .fetch_one(pool)
            .await
    }

    /// One page of approved casting calls, newest first.
    ///
    /// Returns at most [`PAGE_SIZE`] rows starting at `page * PAGE_SIZE`.
    /// Ties on `created_at` are broken by `id` so pages are stable.
    pub async fn list_approved(
        pool: &PgPool,
        filter: &CastingCallFilter,
        page: i64,
    ) -> Result<Vec<CastingCall>, sqlx::Error> {
        let mut conditions = vec!["status = $1".to_string()];
        let mut bind_values = Vec::new();
        let mut bind_idx = 2u32;

        if let Some(ref pattern) = filter.search_pattern {
            conditions.push(format!(
                "(title ILIKE ${bind_idx} OR description ILIKE ${bind_idx} OR role ILIKE ${bind_idx})"
            ));
            bind_idx += 1;
            bind_values.push(BindValue::Text(pattern.clone()));
        }
        if let Some(ref category) = filter.category {
            conditions.push(format!("type = ${bind_idx}"));
            bind_idx += 1;
            bind_values.push(BindValue::Text(category.clone()));
        }
        if let Some(ref gender) = filter.gender {
            conditions.push(format!("gender = ${bind_idx}"));
            bind_idx += 1;
            bind_values.push(BindValue::Text(gender.clone()));
        }
        if let Some(min_age) = filter.min_age {
            conditions.push(format!("min_age >= ${bind_idx}"));
            bind_idx += 1;
            bind_values.push(BindValue::Int(min_age));
        }
        if let Some(max_age) = filter.max_age {
            conditions.push(format!("max_age <= ${bind_idx}"));
            bind_idx += 1;
            bind_values.push(BindValue::Int(max_age));
        }

        let query = format!(
            "SELECT {COLUMNS} FROM casting_calls
             WHERE {conditions}
             ORDER BY created_at DESC, id DESC
             LIMIT ${bind_idx} OFFSET ${next_idx}",
            conditions = conditions.join(" AND "),
            next_idx = bind_idx + 1,
        );

        let mut q = sqlx::query_as::<_, CastingCall>(&query).bind(STATUS_APPROVED);
        for val in &bind_values {
            q = match val {
                BindValue::Int(v) => q.bind(*v),
                BindValue::Text(v) => q.bind(v.as_str()),
            };
        }
        q.bind(PAGE_SIZE)
            .bind(page_offset(page))
            .fetch_all(pool)
            .await
    }

    /// All casting calls submitted by a user, any status, newest first.
    pub async fn list_by_creator(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Vec<CastingCall>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM casting_calls
             WHERE created_by = $1
             ORDER BY created_at DESC, id DESC"
        );
        sqlx::query_as::<_, CastingCall>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// Pending casting calls with submitter name and email, oldest first.
    pub async fn list_pending_with_submitter(
        pool: &PgPool,
    ) -> Result<Vec<PendingCastingCall>, sqlx::Error> {
        let query = format!(
            "SELECT {C_COLUMNS}, p.full_name AS submitter_name, p.email AS submitter_email
             FROM casting_calls c
             JOIN profiles p ON p.id = c.created_by
             WHERE c.status = $1
             ORDER BY c.created_at ASC, c.id ASC"
        );
        sqlx::query_as::<_, PendingCastingCall>(&query)
            .bind(STATUS_PENDING)
            .fetch_all(pool)
            .await
    }

    /// Exact number of casting calls in the given status.
    pub async fn count_by_status(pool: &PgPool, status: &str) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM casting_calls WHERE status = $1")
            .bind(status)
            .fetch_one(pool)
            .await
    }

    /// Set the moderation status. Returns `None` if no row with `id` exists.
    pub async fn update_status(
        pool: &PgPool,
        id: DbId,
        status: &str,
    ) -> Result<Option<CastingCall>, sqlx::Error> {
        let query = format!(
            "UPDATE casting_calls SET status = $2 WHERE id = $1 RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, CastingCall>(&query)
            .bind(id)
            .bind(status)
            .fetch_optional(pool)
            .await
    }

    /// Set the verified flag. Returns `None` if no row with `id` exists.
    pub async fn set_verified(
        pool: &PgPool,
        id: DbId,
        is_verified: bool,
    ) -> Result<Option<CastingCall>, sqlx::Error> {
        let query = format!(
            "UPDATE casting_calls SET is_verified = $2 WHERE id = $1 RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, CastingCall>(&query)
            .bind(id)
            .bind(is_verified)
            .fetch_optional(pool)
            .await
    }

    /// Delete a casting call (favorites cascade). Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM casting_calls WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
