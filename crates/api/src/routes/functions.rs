//! Route definitions for the action-dispatch functions.

use axum::routing::post;
use axum::Router;

use crate::handlers::functions;
use crate::state::AppState;

/// Routes mounted at `/functions/v1`.
///
/// ```text
/// POST /casting-calls  -> casting_calls (create, approve, reject, getPending)
/// POST /auth           -> auth (promoteToAdmin)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/casting-calls", post(functions::casting_calls))
        .route("/auth", post(functions::auth))
}
