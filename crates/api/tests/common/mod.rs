#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use castboard_api::auth::jwt::{generate_access_token, JwtConfig};
use castboard_api::auth::password::hash_password;
use castboard_api::config::ServerConfig;
use castboard_api::router::build_app_router;
use castboard_api::state::AppState;
use castboard_core::roles::ROLE_ADMIN;
use castboard_core::types::DbId;
use castboard_db::models::casting_call::{CastingCall, CreateCastingCall};
use castboard_db::models::profile::{CreateProfile, Profile};
use castboard_db::repositories::{CastingCallRepo, ProfileRepo};
use chrono::NaiveDate;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

/// Password given to every user created by [`create_user`].
pub const TEST_PASSWORD: &str = "audition-2026";

/// Build a test `ServerConfig` with safe defaults and a fixed JWT secret.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        shutdown_timeout_secs: 30,
        log_json: false,
        jwt: JwtConfig {
            secret: "castboard-integration-test-secret".to_string(),
            access_token_expiry_mins: 15,
            refresh_token_expiry_days: 7,
        },
    }
}

/// Build the full application router over the given pool, with the same
/// middleware stack production uses.
pub fn build_test_app(pool: PgPool) -> Router {
    let config = test_config();
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

/// Insert a profile with [`TEST_PASSWORD`], promoting it when `admin` is set.
pub async fn create_user(pool: &PgPool, email: &str, admin: bool) -> Profile {
    let profile = ProfileRepo::create(
        pool,
        &CreateProfile {
            email: email.to_string(),
            password_hash: hash_password(TEST_PASSWORD).expect("hashing should succeed"),
            full_name: Some("Test User".to_string()),
        },
    )
    .await
    .expect("profile creation should succeed");

    if admin {
        ProfileRepo::set_role(pool, profile.id, ROLE_ADMIN)
            .await
            .unwrap()
            .unwrap()
    } else {
        profile
    }
}

/// Sign an access token for `profile` with the test secret.
pub fn token_for(profile: &Profile) -> String {
    generate_access_token(profile.id, &profile.role, &test_config().jwt).unwrap()
}

/// Create a user and return it with an access token.
pub async fn user_with_token(pool: &PgPool, email: &str) -> (Profile, String) {
    let profile = create_user(pool, email, false).await;
    let token = token_for(&profile);
    (profile, token)
}

/// Create an admin and return it with an access token.
pub async fn admin_with_token(pool: &PgPool, email: &str) -> (Profile, String) {
    let profile = create_user(pool, email, true).await;
    let token = token_for(&profile);
    (profile, token)
}

/// Insert a pending casting call owned by `created_by`.
pub async fn create_casting_call(pool: &PgPool, created_by: DbId, title: &str) -> CastingCall {
    CastingCallRepo::create(
        pool,
        &CreateCastingCall {
            title: title.to_string(),
            role: "Supporting".to_string(),
            casting_type: "Film".to_string(),
            description: "Period drama".to_string(),
            image: "https://example.com/still.jpg".to_string(),
            deadline: NaiveDate::from_ymd_opt(2027, 6, 30).unwrap(),
            location: "Chicago, IL".to_string(),
            roles: 2,
            min_age: Some(20),
            max_age: Some(40),
            gender: Some("female".to_string()),
            created_by,
        },
    )
    .await
    .expect("casting call creation should succeed")
}

/// Insert a casting call and approve it.
pub async fn create_approved_casting_call(
    pool: &PgPool,
    created_by: DbId,
    title: &str,
) -> CastingCall {
    let call = create_casting_call(pool, created_by, title).await;
    CastingCallRepo::update_status(pool, call.id, "approved")
        .await
        .unwrap()
        .unwrap()
}

/// A valid submission body for the create endpoints.
pub fn casting_call_body(title: &str) -> serde_json::Value {
    serde_json::json!({
        "title": title,
        "role": "Lead",
        "type": "Theater",
        "description": "Two-hander for a fringe festival",
        "deadline": "2027-02-01",
        "location": "Edinburgh",
        "roles": 2,
        "min_age": 30,
        "max_age": 50,
        "gender": "any"
    })
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

async fn send(
    app: Router,
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<serde_json::Value>,
) -> Response<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {token}"));
    }
    let body = match body {
        Some(json) => {
            builder = builder.header("content-type", "application/json");
            Body::from(serde_json::to_vec(&json).unwrap())
        }
        None => Body::empty(),
    };
    app.oneshot(builder.body(body).unwrap()).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, None, None).await
}

pub async fn get_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    send(app, Method::GET, uri, Some(token), None).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, Method::POST, uri, None, Some(body)).await
}

pub async fn post_json_auth(
    app: Router,
    uri: &str,
    body: serde_json::Value,
    token: &str,
) -> Response<Body> {
    send(app, Method::POST, uri, Some(token), Some(body)).await
}

pub async fn put_json_auth(
    app: Router,
    uri: &str,
    body: serde_json::Value,
    token: &str,
) -> Response<Body> {
    send(app, Method::PUT, uri, Some(token), Some(body)).await
}

pub async fn delete_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    send(app, Method::DELETE, uri, Some(token), None).await
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
