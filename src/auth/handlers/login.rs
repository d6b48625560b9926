/**
 * Login Handler
 *
 * POST /api/login
 *
 * # Authentication Process
 *
 * 1. Validate the request shape
 * 2. Look up the account by email
 * 3. Verify the password with bcrypt
 * 4. Issue a token pair, persist the refresh token, set cookies
 *
 * # Security
 *
 * - Password verification is constant-time (bcrypt) and runs on the
 *   blocking pool
 * - A wrong password answers a bare 403; an unknown email answers a 400
 *   with a message, so email existence is observable here (long-standing
 *   API contract, kept as-is)
 * - Logging in does not revoke the account's earlier refresh tokens;
 *   concurrent sessions stay live until logout or the retention window
 */

use axum::extract::State;
use axum::http::HeaderMap;
use axum::response::Json;

use crate::auth::handlers::register::verify_password;
use crate::auth::handlers::types::{AuthResponse, LoginRequest};
use crate::auth::handlers::issue_session;
use crate::auth::{users, validation};
use crate::error::ApiError;
use crate::server::state::AppState;

/// Authenticate an account.
///
/// # Errors
///
/// * `400` with a field-error list - malformed email or short password
/// * `400 AccountNotFound` - no account with this email
/// * `403` - password mismatch
/// * `400` - store failure
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<(HeaderMap, Json<AuthResponse>), ApiError> {
    let errors = validation::validate_credentials(&request.email, &request.password);
    if !errors.is_empty() {
        return Err(ApiError::Validation(errors));
    }

    tracing::info!("Login request for: {}", request.email);

    let account = users::find_by_email(&state.pool, &request.email)
        .await?
        .ok_or_else(|| {
            tracing::warn!("Login for unknown email: {}", request.email);
            ApiError::AccountNotFound
        })?;

    let valid = verify_password(request.password, account.password_hash.clone()).await?;
    if !valid {
        tracing::warn!("Invalid password for: {}", request.email);
        return Err(ApiError::InvalidCredentials);
    }

    tracing::info!("Login successful: {} ({})", account.id, account.email);

    issue_session(&state, &account.id, &account.email).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::handlers::register::register;
    use crate::auth::handlers::types::RegisterRequest;
    use crate::auth::{cookies, sessions};
    use crate::config::AppConfig;
    use crate::server::db;
    use axum::http::header::SET_COOKIE;

    async fn test_state() -> AppState {
        let pool = db::connect("sqlite::memory:").await.unwrap();
        db::init_schema(&pool).await.unwrap();
        AppState::new(pool, AppConfig::default())
    }

    async fn register_account(state: &AppState, email: &str, password: &str) -> String {
        let (_, body) = register(
            State(state.clone()),
            Json(RegisterRequest {
                email: email.to_string(),
                password: password.to_string(),
            }),
        )
        .await
        .unwrap();
        body.account_id.clone()
    }

    fn refresh_cookie_value(headers: &HeaderMap) -> String {
        headers
            .get_all(SET_COOKIE)
            .iter()
            .filter_map(|v| v.to_str().ok())
            .find_map(|v| v.strip_prefix("refreshToken="))
            .and_then(|rest| rest.split(';').next())
            .expect("refresh cookie present")
            .to_string()
    }

    #[tokio::test]
    async fn test_login_success() {
        let state = test_state().await;
        let account_id = register_account(&state, "cook@example.com", "password123").await;

        let (headers, body) = login(
            State(state.clone()),
            Json(LoginRequest {
                email: "cook@example.com".to_string(),
                password: "password123".to_string(),
            }),
        )
        .await
        .unwrap();

        assert_eq!(body.account_id, account_id);
        assert_eq!(headers.get_all(SET_COOKIE).iter().count(), 2);

        // The refresh token from the cookie is recorded in the store.
        let refresh_token = refresh_cookie_value(&headers);
        assert!(sessions::find_token(&state.pool, &refresh_token)
            .await
            .unwrap()
            .is_some());
        assert_eq!(state.tokens.decode_refresh(&refresh_token).unwrap(), account_id);
    }

    #[tokio::test]
    async fn test_login_wrong_password() {
        let state = test_state().await;
        register_account(&state, "cook@example.com", "password123").await;
        let tokens_before = sessions::count_tokens(&state.pool).await.unwrap();

        let result = login(
            State(state.clone()),
            Json(LoginRequest {
                email: "cook@example.com".to_string(),
                password: "wrongpassword".to_string(),
            }),
        )
        .await;

        assert!(matches!(result, Err(ApiError::InvalidCredentials)));
        // No session was issued for the failed attempt.
        assert_eq!(sessions::count_tokens(&state.pool).await.unwrap(), tokens_before);
    }

    #[tokio::test]
    async fn test_login_unknown_email() {
        let state = test_state().await;

        let result = login(
            State(state),
            Json(LoginRequest {
                email: "nobody@example.com".to_string(),
                password: "password123".to_string(),
            }),
        )
        .await;

        assert!(matches!(result, Err(ApiError::AccountNotFound)));
    }

    #[tokio::test]
    async fn test_each_login_persists_its_own_token() {
        let state = test_state().await;
        register_account(&state, "cook@example.com", "password123").await;

        for _ in 0..2 {
            login(
                State(state.clone()),
                Json(LoginRequest {
                    email: "cook@example.com".to_string(),
                    password: "password123".to_string(),
                }),
            )
            .await
            .unwrap();
        }

        // Registration + two logins; earlier tokens are not revoked.
        assert_eq!(sessions::count_tokens(&state.pool).await.unwrap(), 3);
    }

    #[tokio::test]
    async fn test_cookie_names() {
        let state = test_state().await;
        register_account(&state, "cook@example.com", "password123").await;

        let (headers, _) = login(
            State(state),
            Json(LoginRequest {
                email: "cook@example.com".to_string(),
                password: "password123".to_string(),
            }),
        )
        .await
        .unwrap();

        let cookies: Vec<&str> = headers
            .get_all(SET_COOKIE)
            .iter()
            .filter_map(|v| v.to_str().ok())
            .collect();
        assert!(cookies.iter().any(|c| c.starts_with(&format!("{}=", cookies::ACCESS_COOKIE))));
        assert!(cookies.iter().any(|c| c.starts_with(&format!("{}=", cookies::REFRESH_COOKIE))));
    }
}
