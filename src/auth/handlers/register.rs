/**
 * Registration Handler
 *
 * POST /api/registration
 *
 * # Registration Process
 *
 * 1. Validate email format and password length
 * 2. Reject if an account with the email already exists
 * 3. Hash the password with bcrypt (cost 12, on the blocking pool)
 * 4. Create the account
 * 5. Issue a token pair, persist the refresh token, set cookies
 *
 * # Security
 *
 * - Passwords are hashed before storage and never logged or returned
 * - The existence check and the insert are separate statements; a
 *   concurrent duplicate registration loses at the UNIQUE constraint and
 *   surfaces as a store error instead of a second account
 */

use axum::extract::State;
use axum::http::HeaderMap;
use axum::response::Json;

use crate::auth::handlers::issue_session;
use crate::auth::handlers::types::{AuthResponse, RegisterRequest};
use crate::auth::{users, validation};
use crate::error::ApiError;
use crate::server::state::AppState;

/// Bcrypt cost factor for new password hashes.
pub(crate) const HASH_COST: u32 = 12;

/// Hash a password on the blocking pool.
///
/// Bcrypt at cost 12 is the only CPU-bound work in the service; running it
/// inline would stall every other request on the worker thread.
pub(crate) async fn hash_password(password: String) -> Result<String, ApiError> {
    tokio::task::spawn_blocking(move || bcrypt::hash(password, HASH_COST))
        .await
        .map_err(|err| ApiError::internal(format!("hash task panicked: {}", err)))?
        .map_err(|err| ApiError::internal(format!("bcrypt failure: {}", err)))
}

/// Verify a password against a stored hash on the blocking pool.
pub(crate) async fn verify_password(password: String, hash: String) -> Result<bool, ApiError> {
    tokio::task::spawn_blocking(move || bcrypt::verify(password, &hash))
        .await
        .map_err(|err| ApiError::internal(format!("verify task panicked: {}", err)))?
        .map_err(|err| ApiError::internal(format!("bcrypt failure: {}", err)))
}

/// Register a new account.
///
/// # Errors
///
/// * `400` with a field-error list - malformed email or short password
/// * `400 DuplicateEmail` - an account with this email already exists
/// * `400` - store failure
pub async fn register(
    State(state): State<AppState>,
    Json(request): Json<RegisterRequest>,
) -> Result<(HeaderMap, Json<AuthResponse>), ApiError> {
    let errors = validation::validate_credentials(&request.email, &request.password);
    if !errors.is_empty() {
        return Err(ApiError::Validation(errors));
    }

    tracing::info!("Registration request for: {}", request.email);

    if users::find_by_email(&state.pool, &request.email).await?.is_some() {
        tracing::warn!("Registration with taken email: {}", request.email);
        return Err(ApiError::DuplicateEmail);
    }

    let password_hash = hash_password(request.password).await?;
    let account = users::create_account(&state.pool, &request.email, &password_hash).await?;

    tracing::info!("Account created: {} ({})", account.id, account.email);

    issue_session(&state, &account.id, &account.email).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::sessions;
    use crate::config::AppConfig;
    use crate::server::db;

    async fn test_state() -> AppState {
        let pool = db::connect("sqlite::memory:").await.unwrap();
        db::init_schema(&pool).await.unwrap();
        AppState::new(pool, AppConfig::default())
    }

    #[tokio::test]
    async fn test_register_success_sets_cookies_and_persists_token() {
        let state = test_state().await;
        let request = RegisterRequest {
            email: "cook@example.com".to_string(),
            password: "password123".to_string(),
        };

        let (headers, body) = register(State(state.clone()), Json(request)).await.unwrap();

        assert_eq!(body.email, "cook@example.com");
        assert!(!body.account_id.is_empty());
        assert_eq!(headers.get_all(axum::http::header::SET_COOKIE).iter().count(), 2);
        assert_eq!(sessions::count_tokens(&state.pool).await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_register_duplicate_email() {
        let state = test_state().await;
        let request = || RegisterRequest {
            email: "cook@example.com".to_string(),
            password: "password123".to_string(),
        };

        register(State(state.clone()), Json(request())).await.unwrap();
        let result = register(State(state.clone()), Json(request())).await;

        assert!(matches!(result, Err(ApiError::DuplicateEmail)));
        assert_eq!(users::count_accounts(&state.pool).await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_register_rejects_invalid_input() {
        let state = test_state().await;
        let request = RegisterRequest {
            email: "not-an-email".to_string(),
            password: "short".to_string(),
        };

        let result = register(State(state.clone()), Json(request)).await;
        match result {
            Err(ApiError::Validation(errors)) => assert_eq!(errors.len(), 2),
            other => panic!("expected validation error, got {:?}", other.map(|_| ())),
        }
        assert_eq!(users::count_accounts(&state.pool).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_password_is_stored_hashed() {
        let state = test_state().await;
        let request = RegisterRequest {
            email: "cook@example.com".to_string(),
            password: "password123".to_string(),
        };

        register(State(state.clone()), Json(request)).await.unwrap();

        let account = users::find_by_email(&state.pool, "cook@example.com")
            .await
            .unwrap()
            .unwrap();
        assert_ne!(account.password_hash, "password123");
        assert!(verify_password("password123".to_string(), account.password_hash)
            .await
            .unwrap());
    }
}
