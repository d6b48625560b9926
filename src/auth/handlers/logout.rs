/**
 * Logout Handler
 *
 * DELETE /api/logout
 *
 * Deletes the refresh token named by the cookie from the session store.
 * Logout is idempotent, not an authorization gate: the token's signature is
 * not checked here, and deleting a token that was never stored (or was
 * already removed) still answers success.
 */

use axum::extract::State;
use axum::http::HeaderMap;
use axum::response::Json;

use crate::auth::cookies::{self, REFRESH_COOKIE};
use crate::auth::handlers::types::MessageResponse;
use crate::auth::sessions;
use crate::error::{ApiError, FieldError};
use crate::server::state::AppState;

/// End a session.
///
/// # Errors
///
/// * `400` with a field-error list - no `refreshToken` cookie on the request
/// * `400` - store failure
pub async fn logout(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<MessageResponse>, ApiError> {
    let refresh_token = cookie_or_validation_error(&headers)?;

    let removed = sessions::delete_token(&state.pool, &refresh_token).await?;
    if removed {
        tracing::info!("Refresh token revoked on logout");
    } else {
        tracing::info!("Logout for a token not present in the store");
    }

    Ok(Json(MessageResponse {
        message: "Logout successful".to_string(),
    }))
}

fn cookie_or_validation_error(headers: &HeaderMap) -> Result<String, ApiError> {
    cookies::cookie_value(headers, REFRESH_COOKIE).ok_or_else(|| {
        ApiError::Validation(vec![FieldError::new(
            REFRESH_COOKIE,
            "Refresh token cookie is required",
        )])
    })
}
