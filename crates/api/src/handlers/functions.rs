//! Action-dispatch functions mounted under `/functions/v1`.
//!
//! Each endpoint takes a JSON body `{ "action": "...", ...payload }` and
//! answers with the bare JSON result, or `{ "error": message }` on failure.
//! Failures are 400 except authentication (401) and authorization (403).

use axum::body::Bytes;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use castboard_core::casting::{STATUS_APPROVED, STATUS_REJECTED};
use castboard_core::error::CoreError;
use castboard_core::roles::ROLE_ADMIN;
use castboard_core::types::DbId;
use castboard_db::repositories::{CastingCallRepo, ProfileRepo};
use serde::de::DeserializeOwned;
use serde_json::{json, Value};

use crate::error::AppError;
use crate::handlers::admin::transition_status;
use crate::handlers::casting_call::{submit, CreateCastingCallRequest};
use crate::middleware::auth::AuthUser;
use crate::middleware::rbac::RequireAdmin;
use crate::state::AppState;

/// Error envelope for function responses.
#[derive(Debug, thiserror::Error)]
#[error("{message}")]
pub struct FunctionError {
    pub status: StatusCode,
    pub message: String,
}

impl FunctionError {
    fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }
}

impl From<AppError> for FunctionError {
    fn from(err: AppError) -> Self {
        let (status, _code, message) = err.classify();
        let status = match status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => status,
            _ => StatusCode::BAD_REQUEST,
        };
        Self { status, message }
    }
}

impl From<sqlx::Error> for FunctionError {
    fn from(err: sqlx::Error) -> Self {
        AppError::Database(err).into()
    }
}

impl IntoResponse for FunctionError {
    fn into_response(self) -> Response {
        tracing::warn!(status = %self.status, error = %self.message, "Function call failed");
        (self.status, Json(json!({ "error": self.message }))).into_response()
    }
}

type FunctionResult = Result<Json<Value>, FunctionError>;

/// Parse the body and pull out its `action` name.
fn parse_action(body: &Bytes) -> Result<(String, Value), FunctionError> {
    let value: Value = serde_json::from_slice(body)
        .map_err(|e| FunctionError::bad_request(format!("Invalid JSON body: {e}")))?;
    let action = value
        .get("action")
        .and_then(Value::as_str)
        .ok_or_else(|| FunctionError::bad_request("Invalid action"))?
        .to_string();
    Ok((action, value))
}

/// Deserialize the payload field `key` that accompanies an action.
fn payload<T: DeserializeOwned>(body: &Value, key: &str) -> Result<T, FunctionError> {
    let raw = body
        .get(key)
        .filter(|v| !v.is_null())
        .ok_or_else(|| FunctionError::bad_request(format!("Missing {key}")))?;
    serde_json::from_value(raw.clone())
        .map_err(|e| FunctionError::bad_request(format!("Invalid {key}: {e}")))
}

fn to_json<T: serde::Serialize>(value: T) -> FunctionResult {
    serde_json::to_value(value)
        .map(Json)
        .map_err(|e| AppError::InternalError(format!("Serialization error: {e}")).into())
}

async fn require_admin(state: &AppState, headers: &HeaderMap) -> Result<AuthUser, FunctionError> {
    let user = AuthUser::from_headers(headers, &state.config.jwt)?;
    let RequireAdmin(admin) = RequireAdmin::check(&state.pool, user).await?;
    Ok(admin)
}

/// POST /functions/v1/casting-calls
///
/// | action       | payload                 | access |
/// |--------------|-------------------------|--------|
/// | `create`     | `castingCall`           | auth   |
/// | `approve`    | `id`                    | admin  |
/// | `reject`     | `id`                    | admin  |
/// | `getPending` | --                      | admin  |
pub async fn casting_calls(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> FunctionResult {
    let (action, body) = parse_action(&body)?;
    tracing::info!(action = %action, "Processing casting-calls function");

    match action.as_str() {
        "create" => {
            let user = AuthUser::from_headers(&headers, &state.config.jwt)?;
            let input: CreateCastingCallRequest = payload(&body, "castingCall")?;
            to_json(submit(&state.pool, &user, input).await?)
        }
        "approve" | "reject" => {
            let admin = require_admin(&state, &headers).await?;
            let id: DbId = payload(&body, "id")?;
            let status = if action == "approve" {
                STATUS_APPROVED
            } else {
                STATUS_REJECTED
            };
            to_json(transition_status(&state.pool, admin.user_id, id, status).await?)
        }
        "getPending" => {
            require_admin(&state, &headers).await?;
            to_json(CastingCallRepo::list_pending_with_submitter(&state.pool).await?)
        }
        _ => Err(FunctionError::bad_request("Invalid action")),
    }
}

/// POST /functions/v1/auth
///
/// | action           | payload  | access |
/// |------------------|----------|--------|
/// | `promoteToAdmin` | `userId` | admin  |
pub async fn auth(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> FunctionResult {
    let (action, body) = parse_action(&body)?;
    tracing::info!(action = %action, "Processing auth function");

    match action.as_str() {
        "promoteToAdmin" => {
            let admin = require_admin(&state, &headers).await?;
            let user_id: DbId = payload(&body, "userId")?;
            ProfileRepo::set_role(&state.pool, user_id, ROLE_ADMIN)
                .await?
                .ok_or(AppError::Core(CoreError::NotFound {
                    entity: "Profile",
                    id: user_id,
                }))?;
            tracing::info!(user_id, admin_id = admin.user_id, "Profile promoted to admin");
            Ok(Json(json!({ "success": true })))
        }
        _ => Err(FunctionError::bad_request("Invalid action")),
    }
}
