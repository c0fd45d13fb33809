//! Casting call entity model, DTOs, and listing filter.

use castboard_core::types::{DbId, Timestamp};
use chrono::NaiveDate;
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `casting_calls` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct CastingCall {
    pub id: DbId,
    pub title: String,
    pub role: String,
    /// Category, e.g. `"Film"` or `"Theater"`.
    #[sqlx(rename = "type")]
    #[serde(rename = "type")]
    pub casting_type: String,
    pub description: String,
    pub image: String,
    pub deadline: NaiveDate,
    pub location: String,
    /// Number of roles available.
    pub roles: i32,
    pub min_age: Option<i32>,
    pub max_age: Option<i32>,
    pub gender: Option<String>,
    pub created_by: DbId,
    pub status: String,
    pub is_verified: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A pending casting call joined with its submitter, for the admin queue.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct PendingCastingCall {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub casting_call: CastingCall,
    pub submitter_name: Option<String>,
    pub submitter_email: String,
}

/// DTO for inserting a casting call. Status always starts as `pending`.
#[derive(Debug, Clone)]
pub struct CreateCastingCall {
    pub title: String,
    pub role: String,
    pub casting_type: String,
    pub description: String,
    pub image: String,
    pub deadline: NaiveDate,
    pub location: String,
    pub roles: i32,
    pub min_age: Option<i32>,
    pub max_age: Option<i32>,
    pub gender: Option<String>,
    pub created_by: DbId,
}

/// Filters for the public approved listing. `None` means "no filter".
///
/// Callers normalize inputs first (see `castboard_core::casting` and
/// `castboard_core::search`); the repository binds them as given.
#[derive(Debug, Clone, Default)]
pub struct CastingCallFilter {
    pub category: Option<String>,
    pub gender: Option<String>,
    pub min_age: Option<i32>,
    pub max_age: Option<i32>,
    /// Already-escaped `ILIKE` pattern matched against title, description, and role.
    pub search_pattern: Option<String>,
}
