//! Shared test fixtures.
//!
//! Every test gets its own in-memory SQLite database; the pool is capped at
//! one connection because each `sqlite::memory:` connection is otherwise a
//! separate database.

#![allow(dead_code)]

use axum::extract::State;
use axum::http::header::SET_COOKIE;
use axum::http::HeaderMap;
use axum::response::Json;

use forkful::auth::handlers::types::{AuthResponse, LoginRequest, RegisterRequest};
use forkful::auth::handlers::{login, register};
use forkful::server::db;
use forkful::{AppConfig, AppState};

/// Build a fresh application state over an in-memory database.
pub async fn test_state() -> AppState {
    let pool = db::connect("sqlite::memory:")
        .await
        .expect("Failed to create test database pool");
    db::init_schema(&pool).await.expect("Failed to apply schema");
    AppState::new(pool, AppConfig::default())
}

/// Register an account and return the response headers and body.
pub async fn register_account(
    state: &AppState,
    email: &str,
    password: &str,
) -> (HeaderMap, Json<AuthResponse>) {
    register(
        State(state.clone()),
        Json(RegisterRequest {
            email: email.to_string(),
            password: password.to_string(),
        }),
    )
    .await
    .expect("registration failed")
}

/// Log in and return the response headers and body.
pub async fn login_account(
    state: &AppState,
    email: &str,
    password: &str,
) -> (HeaderMap, Json<AuthResponse>) {
    login(
        State(state.clone()),
        Json(LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        }),
    )
    .await
    .expect("login failed")
}

/// Pull a named cookie's value out of a response's Set-Cookie headers.
pub fn set_cookie_value(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get_all(SET_COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .find_map(|cookie| cookie.strip_prefix(&format!("{}=", name)))
        .and_then(|rest| rest.split(';').next())
        .map(|value| value.to_string())
}
