//! Role-based access control (RBAC) extractor.
//!
//! [`RequireAdmin`] wraps [`AuthUser`] and rejects requests whose role does
//! not meet the requirement, enforcing authorization at the type level.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use castboard_core::error::CoreError;
use castboard_core::roles::is_admin;
use castboard_db::repositories::ProfileRepo;
use castboard_db::DbPool;

use super::auth::AuthUser;
use crate::error::AppError;
use crate::state::AppState;

/// Requires the `admin` role. Rejects with 403 Forbidden otherwise.
///
/// The token's role claim is checked first, then the stored profile role, so
/// a demoted admin loses access before their token expires.
///
/// ```ignore
/// async fn admin_only(RequireAdmin(user): RequireAdmin) -> AppResult<Json<()>> {
///     Ok(Json(()))
/// }
/// ```
pub struct RequireAdmin(pub AuthUser);

impl RequireAdmin {
    /// Authorize an already-authenticated user as admin.
    pub async fn check(pool: &DbPool, user: AuthUser) -> Result<Self, AppError> {
        if !user.is_admin() {
            return Err(forbidden());
        }
        let stored = ProfileRepo::find_role(pool, user.user_id).await?;
        match stored.as_deref() {
            Some(role) if is_admin(role) => Ok(RequireAdmin(user)),
            _ => {
                tracing::warn!(user_id = user.user_id, "Admin token without stored admin role");
                Err(forbidden())
            }
        }
    }
}

impl FromRequestParts<AppState> for RequireAdmin {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user = AuthUser::from_request_parts(parts, state).await?;
        RequireAdmin::check(&state.pool, user).await
    }
}

fn forbidden() -> AppError {
    AppError::Core(CoreError::Forbidden("Admin role required".into()))
}
