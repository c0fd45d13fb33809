//! Profile entity model and DTOs.

use castboard_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Full profile row from the `profiles` table.
///
/// Contains the password hash -- NEVER serialize this to API responses directly.
/// Use [`ProfileResponse`] for external-facing output.
#[derive(Debug, Clone, FromRow)]
pub struct Profile {
    pub id: DbId,
    pub email: String,
    pub password_hash: String,
    pub full_name: Option<String>,
    pub avatar_url: Option<String>,
    pub role: String,
    pub admin_request_status: Option<String>,
    pub admin_request_reason: Option<String>,
    pub admin_request_date: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Safe profile representation for API responses (no password hash).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProfileResponse {
    pub id: DbId,
    pub email: String,
    pub full_name: Option<String>,
    pub avatar_url: Option<String>,
    pub role: String,
    pub admin_request_status: Option<String>,
    pub admin_request_reason: Option<String>,
    pub admin_request_date: Option<Timestamp>,
    pub created_at: Timestamp,
}

impl From<Profile> for ProfileResponse {
    fn from(p: Profile) -> Self {
        Self {
            id: p.id,
            email: p.email,
            full_name: p.full_name,
            avatar_url: p.avatar_url,
            role: p.role,
            admin_request_status: p.admin_request_status,
            admin_request_reason: p.admin_request_reason,
            admin_request_date: p.admin_request_date,
            created_at: p.created_at,
        }
    }
}

/// DTO for creating a new profile at sign-up.
#[derive(Debug)]
pub struct CreateProfile {
    pub email: String,
    pub password_hash: String,
    pub full_name: Option<String>,
}

/// DTO for a self-edit. All fields are optional.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateProfile {
    pub full_name: Option<String>,
    pub avatar_url: Option<String>,
}
