//! Handlers for favorites (per-user casting-call bookmarks).

use axum::extract::{Path, State};
use axum::Json;
use castboard_core::error::CoreError;
use castboard_core::types::DbId;
use castboard_db::models::casting_call::CastingCall;
use castboard_db::models::favorite::FavoriteToggle;
use castboard_db::repositories::{CastingCallRepo, FavoriteRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /api/v1/casting-calls/{id}/favorite
///
/// Flip the caller's favorite on a casting call and report the new state.
pub async fn toggle_favorite(
    State(state): State<AppState>,
    user: AuthUser,
    Path(casting_call_id): Path<DbId>,
) -> AppResult<Json<DataResponse<FavoriteToggle>>> {
    if !CastingCallRepo::exists(&state.pool, casting_call_id).await? {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "CastingCall",
            id: casting_call_id,
        }));
    }

    let favorited = FavoriteRepo::toggle(&state.pool, user.user_id, casting_call_id).await?;

    tracing::info!(
        user_id = user.user_id,
        casting_call_id,
        favorited,
        "Favorite toggled",
    );

    Ok(Json(DataResponse {
        data: FavoriteToggle {
            casting_call_id,
            favorited,
        },
    }))
}

/// GET /api/v1/favorites
///
/// The caller's favorited casting calls, most recently favorited first.
pub async fn list_favorites(
    State(state): State<AppState>,
    user: AuthUser,
) -> AppResult<Json<DataResponse<Vec<CastingCall>>>> {
    let items = FavoriteRepo::list_casting_calls_for_user(&state.pool, user.user_id).await?;
    Ok(Json(DataResponse { data: items }))
}
