//! Route definitions for the `/casting-calls` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{casting_call, favorite};
use crate::state::AppState;

/// Routes mounted at `/casting-calls`.
///
/// ```text
/// GET  /               -> list_casting_calls (public, paginated)
/// POST /               -> create_casting_call (requires auth)
/// GET  /categories     -> list_categories
/// GET  /mine           -> list_my_casting_calls (requires auth)
/// GET  /{id}           -> get_casting_call
/// POST /{id}/favorite  -> toggle_favorite (requires auth)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(casting_call::list_casting_calls).post(casting_call::create_casting_call),
        )
        .route("/categories", get(casting_call::list_categories))
        .route("/mine", get(casting_call::list_my_casting_calls))
        .route("/{id}", get(casting_call::get_casting_call))
        .route("/{id}/favorite", post(favorite::toggle_favorite))
}
