/**
 * Session-Check Middleware
 *
 * Protects routes that need a logged-in account (the favorites endpoints).
 *
 * The check:
 * 1. Reads the `refreshToken` cookie
 * 2. Decodes it with the refresh secret (signature + expiry)
 * 3. Attaches the account id to request extensions for the handler
 *
 * Signature and expiry only - the session store is consulted by logout
 * alone, so a logged-out token keeps passing this check until its embedded
 * expiry. That stateless trade-off is part of the current API contract.
 */

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::Response;

use crate::auth::cookies::{self, REFRESH_COOKIE};
use crate::error::ApiError;
use crate::server::state::AppState;

/// Account identity attached to a request by `session_check`.
#[derive(Debug, Clone)]
pub struct CurrentAccount {
    pub account_id: String,
}

/// Reject requests without a live session; expose the account id to the
/// handler via extensions.
pub async fn session_check(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = cookies::cookie_value(request.headers(), REFRESH_COOKIE).ok_or_else(|| {
        tracing::warn!("Session check: missing refresh token cookie");
        ApiError::Unauthorized
    })?;

    let account_id = state.tokens.decode_refresh(&token).map_err(|err| {
        tracing::warn!("Session check: {}", err);
        ApiError::Unauthorized
    })?;

    request.extensions_mut().insert(CurrentAccount { account_id });

    Ok(next.run(request).await)
}
