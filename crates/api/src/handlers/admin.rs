//! Admin-only handlers: casting-call moderation and admin-access requests.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use castboard_core::admin_request::{check_can_decide, validate_decision};
use castboard_core::casting::{validate_review_status, STATUS_PENDING};
use castboard_core::error::CoreError;
use castboard_core::types::DbId;
use castboard_db::models::casting_call::{CastingCall, PendingCastingCall};
use castboard_db::models::profile::ProfileResponse;
use castboard_db::repositories::{CastingCallRepo, ProfileRepo};
use castboard_db::retry::{with_retry, ADMIN_REQUESTS_RETRIES, ADMIN_REQUESTS_RETRY_DELAY};
use castboard_db::DbPool;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAdmin;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for status changes (`approved` or `rejected`).
#[derive(Debug, Deserialize)]
pub struct StatusUpdate {
    pub status: String,
}

/// Request body for `PUT /admin/casting-calls/{id}/verified`.
#[derive(Debug, Deserialize)]
pub struct VerifiedUpdate {
    pub is_verified: bool,
}

/// The moderation queue with its exact size.
#[derive(Debug, Serialize)]
pub struct PendingQueue {
    pub items: Vec<PendingCastingCall>,
    pub total: i64,
}

// ---------------------------------------------------------------------------
// Shared operations
// ---------------------------------------------------------------------------

/// Move a casting call to `approved` or `rejected`.
pub(crate) async fn transition_status(
    pool: &DbPool,
    admin_id: DbId,
    id: DbId,
    status: &str,
) -> AppResult<CastingCall> {
    validate_review_status(status).map_err(|msg| AppError::Core(CoreError::Validation(msg)))?;

    let casting_call = CastingCallRepo::update_status(pool, id, status)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "CastingCall",
            id,
        }))?;

    tracing::info!(casting_call_id = id, admin_id, status, "Casting call reviewed");
    Ok(casting_call)
}

// ---------------------------------------------------------------------------
// Casting-call moderation
// ---------------------------------------------------------------------------

/// GET /api/v1/admin/casting-calls/pending
pub async fn list_pending(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
) -> AppResult<Json<DataResponse<PendingQueue>>> {
    let items = CastingCallRepo::list_pending_with_submitter(&state.pool).await?;
    let total = CastingCallRepo::count_by_status(&state.pool, STATUS_PENDING).await?;
    Ok(Json(DataResponse {
        data: PendingQueue { items, total },
    }))
}

/// POST /api/v1/admin/casting-calls/{id}/status
pub async fn update_status(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    Path(id): Path<DbId>,
    Json(input): Json<StatusUpdate>,
) -> AppResult<Json<DataResponse<CastingCall>>> {
    let casting_call = transition_status(&state.pool, admin.user_id, id, &input.status).await?;
    Ok(Json(DataResponse { data: casting_call }))
}

/// PUT /api/v1/admin/casting-calls/{id}/verified
pub async fn set_verified(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    Path(id): Path<DbId>,
    Json(input): Json<VerifiedUpdate>,
) -> AppResult<Json<DataResponse<CastingCall>>> {
    let casting_call = CastingCallRepo::set_verified(&state.pool, id, input.is_verified)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "CastingCall",
            id,
        }))?;

    tracing::info!(
        casting_call_id = id,
        admin_id = admin.user_id,
        is_verified = input.is_verified,
        "Casting call verification updated",
    );
    Ok(Json(DataResponse { data: casting_call }))
}

/// DELETE /api/v1/admin/casting-calls/{id}
pub async fn delete_casting_call(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if !CastingCallRepo::delete(&state.pool, id).await? {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "CastingCall",
            id,
        }));
    }
    tracing::info!(casting_call_id = id, admin_id = admin.user_id, "Casting call deleted");
    Ok(StatusCode::NO_CONTENT)
}

// ---------------------------------------------------------------------------
// Admin-access requests
// ---------------------------------------------------------------------------

/// GET /api/v1/admin/admin-requests
///
/// Pending requests, oldest first. Transient connection failures are retried.
pub async fn list_admin_requests(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
) -> AppResult<Json<DataResponse<Vec<ProfileResponse>>>> {
    let profiles = with_retry(ADMIN_REQUESTS_RETRIES, ADMIN_REQUESTS_RETRY_DELAY, || {
        ProfileRepo::list_pending_admin_requests(&state.pool)
    })
    .await?;

    Ok(Json(DataResponse {
        data: profiles.into_iter().map(ProfileResponse::from).collect(),
    }))
}

/// POST /api/v1/admin/admin-requests/{user_id}
///
/// Approve or reject a pending request. Approval grants the admin role.
pub async fn handle_admin_request(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    Path(user_id): Path<DbId>,
    Json(input): Json<StatusUpdate>,
) -> AppResult<Json<DataResponse<ProfileResponse>>> {
    validate_decision(&input.status)
        .map_err(|msg| AppError::Core(CoreError::Validation(msg)))?;

    let profile = ProfileRepo::find_by_id(&state.pool, user_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Profile",
            id: user_id,
        }))?;
    check_can_decide(profile.admin_request_status.as_deref())
        .map_err(|msg| AppError::Core(CoreError::Conflict(msg)))?;

    // The update is conditional on the request still being pending, so a
    // concurrent decision surfaces here as `None`.
    let decided = ProfileRepo::decide_admin_request(&state.pool, user_id, &input.status)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::Conflict(
                "Admin request was already handled".into(),
            ))
        })?;

    tracing::info!(
        user_id,
        admin_id = admin.user_id,
        decision = %input.status,
        "Admin request handled",
    );

    Ok(Json(DataResponse {
        data: decided.into(),
    }))
}
