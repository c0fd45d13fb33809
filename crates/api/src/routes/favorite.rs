use axum::routing::get;
use axum::Router;

use crate::handlers::favorite;
use crate::state::AppState;

/// Routes mounted at `/favorites`.
///
/// ```text
/// GET /  -> list_favorites (requires auth)
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(favorite::list_favorites))
}
