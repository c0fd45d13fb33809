//! Route definitions for the `/admin` area. Every handler requires the
//! admin role via [`crate::middleware::rbac::RequireAdmin`].

use axum::routing::{delete, get, post, put};
use axum::Router;

use crate::handlers::admin;
use crate::state::AppState;

/// Routes mounted at `/admin`.
///
/// ```text
/// GET    /casting-calls/pending        -> list_pending
/// DELETE /casting-calls/{id}           -> delete_casting_call
/// POST   /casting-calls/{id}/status    -> update_status
/// PUT    /casting-calls/{id}/verified  -> set_verified
/// GET    /admin-requests               -> list_admin_requests
/// POST   /admin-requests/{user_id}     -> handle_admin_request
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/casting-calls/pending", get(admin::list_pending))
        .route("/casting-calls/{id}", delete(admin::delete_casting_call))
        .route("/casting-calls/{id}/status", post(admin::update_status))
        .route("/casting-calls/{id}/verified", put(admin::set_verified))
        .route("/admin-requests", get(admin::list_admin_requests))
        .route("/admin-requests/{user_id}", post(admin::handle_admin_request))
}
