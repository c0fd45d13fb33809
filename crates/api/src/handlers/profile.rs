//! Handlers for the caller's own `/profile`.

use axum::extract::State;
use axum::Json;
use castboard_core::admin_request::{check_can_request, validate_reason};
use castboard_core::error::CoreError;
use castboard_core::types::DbId;
use castboard_db::models::profile::{Profile, ProfileResponse, UpdateProfile};
use castboard_db::repositories::ProfileRepo;
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// Request body for `POST /profile/admin-request`.
#[derive(Debug, Deserialize)]
pub struct AdminRequestBody {
    pub reason: String,
}

/// GET /api/v1/profile
pub async fn get_me(
    State(state): State<AppState>,
    user: AuthUser,
) -> AppResult<Json<DataResponse<ProfileResponse>>> {
    let profile = find_profile(&state, user.user_id).await?;
    Ok(Json(DataResponse {
        data: profile.into(),
    }))
}

/// PUT /api/v1/profile
///
/// Patch `full_name` and/or `avatar_url`. Absent fields are left unchanged.
pub async fn update_me(
    State(state): State<AppState>,
    user: AuthUser,
    Json(input): Json<UpdateProfile>,
) -> AppResult<Json<DataResponse<ProfileResponse>>> {
    let profile = ProfileRepo::update(&state.pool, user.user_id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Profile",
            id: user.user_id,
        }))?;

    Ok(Json(DataResponse {
        data: profile.into(),
    }))
}

/// POST /api/v1/profile/admin-request
///
/// Ask for the admin role. Rejected if the caller is already an admin or
/// already has a request pending.
pub async fn request_admin_role(
    State(state): State<AppState>,
    user: AuthUser,
    Json(input): Json<AdminRequestBody>,
) -> AppResult<Json<DataResponse<ProfileResponse>>> {
    let reason = input.reason.trim();
    validate_reason(reason).map_err(|msg| AppError::Core(CoreError::Validation(msg)))?;

    let current = find_profile(&state, user.user_id).await?;
    check_can_request(&current.role, current.admin_request_status.as_deref())
        .map_err(|msg| AppError::Core(CoreError::Conflict(msg)))?;

    let profile = ProfileRepo::request_admin_role(&state.pool, user.user_id, reason)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Profile",
            id: user.user_id,
        }))?;

    tracing::info!(user_id = user.user_id, "Admin access requested");

    Ok(Json(DataResponse {
        data: profile.into(),
    }))
}

async fn find_profile(state: &AppState, id: DbId) -> AppResult<Profile> {
    ProfileRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Profile",
            id,
        }))
}
