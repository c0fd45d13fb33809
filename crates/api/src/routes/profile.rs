//! Route definitions for the caller's `/profile`.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::profile;
use crate::state::AppState;

/// Routes mounted at `/profile` (all require auth).
///
/// ```text
/// GET  /               -> get_me
/// PUT  /               -> update_me
/// POST /admin-request  -> request_admin_role
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(profile::get_me).put(profile::update_me))
        .route("/admin-request", post(profile::request_admin_role))
}
