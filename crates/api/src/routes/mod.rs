pub mod admin;
pub mod auth;
pub mod casting_call;
pub mod favorite;
pub mod functions;
pub mod health;
pub mod profile;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/signup                                     sign up (public)
/// /auth/login                                      login (public)
/// /auth/refresh                                    refresh (public)
/// /auth/logout                                     logout (requires auth)
///
/// /profile                                         get, update own profile
/// /profile/admin-request                           request admin access (POST)
///
/// /casting-calls                                   approved listing (GET), submit (POST)
/// /casting-calls/categories                        category list (GET)
/// /casting-calls/mine                              own submissions (GET)
/// /casting-calls/{id}                              get
/// /casting-calls/{id}/favorite                     toggle favorite (POST)
///
/// /favorites                                       own favorites (GET)
///
/// /admin/casting-calls/pending                     moderation queue (GET)
/// /admin/casting-calls/{id}                        delete
/// /admin/casting-calls/{id}/status                 approve / reject (POST)
/// /admin/casting-calls/{id}/verified               set verified flag (PUT)
/// /admin/admin-requests                            pending admin requests (GET)
/// /admin/admin-requests/{user_id}                  approve / reject (POST)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/profile", profile::router())
        .nest("/casting-calls", casting_call::router())
        .nest("/favorites", favorite::router())
        .nest("/admin", admin::router())
}
