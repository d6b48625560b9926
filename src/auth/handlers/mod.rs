//! HTTP handlers for the auth endpoints.
//!
//! - `POST /api/registration` - `register`
//! - `POST /api/login` - `login`
//! - `POST /api/change-password` - `change_password`
//! - `DELETE /api/logout` - `logout`
//!
//! Register, login, and change-password share a tail: issue a token pair,
//! persist the refresh token, answer `{accountId, email}` with both tokens
//! set as cookies (`issue_session` below).

pub mod change_password;
pub mod login;
pub mod logout;
pub mod register;
pub mod types;

pub use change_password::change_password;
pub use login::login;
pub use logout::logout;
pub use register::register;

use axum::http::HeaderMap;
use axum::response::Json;

use crate::auth::{cookies, sessions};
use crate::error::ApiError;
use crate::server::state::AppState;
use types::AuthResponse;

/// Shared success tail for register/login/change-password.
///
/// Issues a fresh access+refresh pair for the account, persists the refresh
/// token in the session store, and builds the cookie headers and response
/// body. Token issuance and persistence are two independent steps; a crash
/// between account creation and this call leaves an account with no session,
/// recovered by a later login.
pub(crate) async fn issue_session(
    state: &AppState,
    account_id: &str,
    email: &str,
) -> Result<(HeaderMap, Json<AuthResponse>), ApiError> {
    let access_token = state.tokens.issue_access(account_id)?;
    let refresh_token = state.tokens.issue_refresh(account_id)?;

    sessions::insert_token(&state.pool, &refresh_token).await?;

    let headers =
        cookies::auth_cookie_headers(&access_token, &refresh_token, state.config.production)?;

    Ok((
        headers,
        Json(AuthResponse {
            account_id: account_id.to_string(),
            email: email.to_string(),
        }),
    ))
}
