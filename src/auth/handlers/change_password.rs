/**
 * Change-Password Handler
 *
 * POST /api/change-password
 *
 * Requires the email and current password rather than a session cookie;
 * verifying the old password is the authentication here.
 *
 * # Process
 *
 * 1. Validate the request shape (including the new password's length)
 * 2. Look up the account, verify the old password
 * 3. Re-hash and store the new password
 * 4. Issue a fresh token pair, persist the refresh token, set cookies
 *
 * Earlier refresh tokens for the account stay valid in the session store;
 * changing the password does not revoke live sessions.
 */

use axum::extract::State;
use axum::http::HeaderMap;
use axum::response::Json;

use crate::auth::handlers::register::{hash_password, verify_password};
use crate::auth::handlers::types::{AuthResponse, ChangePasswordRequest};
use crate::auth::handlers::issue_session;
use crate::auth::{users, validation};
use crate::error::ApiError;
use crate::server::state::AppState;

/// Change an account's password.
///
/// # Errors
///
/// * `400` with a field-error list - malformed input
/// * `400 AccountNotFound` - no account with this email
/// * `400 PasswordMismatch` - old password does not verify (note: login's
///   equivalent failure is a 403; the split is part of the API contract)
/// * `400` - store failure
pub async fn change_password(
    State(state): State<AppState>,
    Json(request): Json<ChangePasswordRequest>,
) -> Result<(HeaderMap, Json<AuthResponse>), ApiError> {
    let errors = validation::validate_password_change(
        &request.email,
        &request.password,
        &request.new_password,
    );
    if !errors.is_empty() {
        return Err(ApiError::Validation(errors));
    }

    tracing::info!("Password change request for: {}", request.email);

    let account = users::find_by_email(&state.pool, &request.email)
        .await?
        .ok_or_else(|| {
            tracing::warn!("Password change for unknown email: {}", request.email);
            ApiError::AccountNotFound
        })?;

    let valid = verify_password(request.password, account.password_hash.clone()).await?;
    if !valid {
        tracing::warn!("Password change with wrong password for: {}", request.email);
        return Err(ApiError::PasswordMismatch);
    }

    let new_hash = hash_password(request.new_password).await?;
    let account = users::update_password(&state.pool, &request.email, &new_hash).await?;

    tracing::info!("Password changed: {} ({})", account.id, account.email);

    issue_session(&state, &account.id, &account.email).await
}
