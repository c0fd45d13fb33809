//! Handlers for the `/casting-calls` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use castboard_core::casting::{
    validate_age_range, validate_casting_type, validate_gender, CASTING_TYPES, DEFAULT_IMAGE,
    STATUS_APPROVED,
};
use castboard_core::error::CoreError;
use castboard_core::feed::ListingPage;
use castboard_core::types::DbId;
use castboard_db::models::casting_call::{CastingCall, CreateCastingCall};
use castboard_db::repositories::CastingCallRepo;
use castboard_db::DbPool;
use chrono::NaiveDate;
use serde::Deserialize;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::{AuthUser, MaybeAuthUser};
use crate::middleware::rbac::RequireAdmin;
use crate::query::ListingParams;
use crate::response::DataResponse;
use crate::state::AppState;

/// Submission payload for a new casting call.
///
/// Also accepted as the `castingCall` field of the `create` function action.
/// Any `status`, `created_by`, or `is_verified` sent by the client is ignored.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateCastingCallRequest {
    #[validate(length(min = 1, max = 200, message = "Title is required (max 200 characters)"))]
    pub title: String,
    #[validate(length(min = 1, max = 200, message = "Role is required (max 200 characters)"))]
    pub role: String,
    #[serde(rename = "type")]
    pub casting_type: String,
    #[validate(length(min = 1, message = "Description is required"))]
    pub description: String,
    pub image: Option<String>,
    pub deadline: NaiveDate,
    #[validate(length(min = 1, max = 200, message = "Location is required (max 200 characters)"))]
    pub location: String,
    #[validate(range(min = 1, message = "At least one role must be available"))]
    pub roles: i32,
    pub min_age: Option<i32>,
    pub max_age: Option<i32>,
    pub gender: Option<String>,
}

impl CreateCastingCallRequest {
    /// Trim text fields, then run field rules and domain checks, producing
    /// the insert DTO owned by `created_by`.
    pub fn into_create(mut self, created_by: DbId) -> AppResult<CreateCastingCall> {
        for field in [
            &mut self.title,
            &mut self.role,
            &mut self.casting_type,
            &mut self.description,
            &mut self.location,
        ] {
            *field = field.trim().to_string();
        }
        self.validate()?;

        let validation = |msg: String| AppError::Core(CoreError::Validation(msg));
        validate_casting_type(&self.casting_type).map_err(validation)?;
        validate_age_range(self.min_age, self.max_age).map_err(validation)?;

        let gender = self
            .gender
            .map(|g| g.trim().to_lowercase())
            .filter(|g| !g.is_empty());
        if let Some(ref g) = gender {
            validate_gender(g).map_err(validation)?;
        }

        let image = self
            .image
            .map(|i| i.trim().to_string())
            .filter(|i| !i.is_empty())
            .unwrap_or_else(|| DEFAULT_IMAGE.to_string());

        Ok(CreateCastingCall {
            title: self.title,
            role: self.role,
            casting_type: self.casting_type,
            description: self.description,
            image,
            deadline: self.deadline,
            location: self.location,
            roles: self.roles,
            min_age: self.min_age,
            max_age: self.max_age,
            gender,
            created_by,
        })
    }
}

/// Validate and insert a submission as `pending`.
pub(crate) async fn submit(
    pool: &DbPool,
    user: &AuthUser,
    input: CreateCastingCallRequest,
) -> AppResult<CastingCall> {
    let create = input.into_create(user.user_id)?;
    let casting_call = CastingCallRepo::create(pool, &create).await?;

    tracing::info!(
        casting_call_id = casting_call.id,
        user_id = user.user_id,
        casting_type = %casting_call.casting_type,
        "Casting call submitted for review",
    );

    Ok(casting_call)
}

/// GET /api/v1/casting-calls
///
/// One page of approved casting calls, newest first. `has_more` is true
/// whenever the page came back full.
pub async fn list_casting_calls(
    State(state): State<AppState>,
    Query(params): Query<ListingParams>,
) -> AppResult<Json<DataResponse<ListingPage<CastingCall>>>> {
    let page = params.page();
    let filter = params.to_filter();
    let rows = CastingCallRepo::list_approved(&state.pool, &filter, page).await?;

    tracing::debug!(page, returned = rows.len(), "Listed approved casting calls");

    Ok(Json(DataResponse {
        data: ListingPage::from_rows(page, rows),
    }))
}

/// POST /api/v1/casting-calls
pub async fn create_casting_call(
    State(state): State<AppState>,
    user: AuthUser,
    Json(input): Json<CreateCastingCallRequest>,
) -> AppResult<(StatusCode, Json<DataResponse<CastingCall>>)> {
    let casting_call = submit(&state.pool, &user, input).await?;
    Ok((
        StatusCode::CREATED,
        Json(DataResponse { data: casting_call }),
    ))
}

/// GET /api/v1/casting-calls/categories
pub async fn list_categories() -> Json<DataResponse<&'static [&'static str]>> {
    Json(DataResponse {
        data: CASTING_TYPES,
    })
}

/// GET /api/v1/casting-calls/mine
///
/// The caller's own submissions in every status.
pub async fn list_my_casting_calls(
    State(state): State<AppState>,
    user: AuthUser,
) -> AppResult<Json<DataResponse<Vec<CastingCall>>>> {
    let items = CastingCallRepo::list_by_creator(&state.pool, user.user_id).await?;
    Ok(Json(DataResponse { data: items }))
}

/// GET /api/v1/casting-calls/{id}
///
/// Approved calls are public. Others are visible only to their creator and
/// to admins; everyone else gets 404.
pub async fn get_casting_call(
    State(state): State<AppState>,
    MaybeAuthUser(user): MaybeAuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<CastingCall>>> {
    let not_found = || {
        AppError::Core(CoreError::NotFound {
            entity: "CastingCall",
            id,
        })
    };

    let casting_call = CastingCallRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(not_found)?;

    let visible = match user {
        _ if casting_call.status == STATUS_APPROVED => true,
        Some(u) if u.user_id == casting_call.created_by => true,
        // Admin claims are confirmed against the stored role.
        Some(u) if u.is_admin() => RequireAdmin::check(&state.pool, u).await.is_ok(),
        _ => false,
    };
    if !visible {
        return Err(not_found());
    }

    Ok(Json(DataResponse { data: casting_call }))
}
