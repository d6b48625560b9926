//! Session cookie helpers.
//!
//! Both tokens travel as HTTP-only cookies built by hand as `Set-Cookie`
//! headers. `SameSite=None` keeps them usable from the cross-origin
//! frontend; the `Secure` attribute is appended only in production. The
//! 2-hour `Max-Age` is a client-side hint independent of the expiry each
//! token carries internally.

use axum::http::header::{HeaderMap, HeaderValue, COOKIE, SET_COOKIE};

use crate::error::ApiError;

pub const ACCESS_COOKIE: &str = "accessToken";
pub const REFRESH_COOKIE: &str = "refreshToken";

/// Cookie lifetime: 2 hours.
pub const COOKIE_MAX_AGE_SECS: i64 = 2 * 60 * 60;

/// Build one session cookie header value.
fn session_cookie(name: &str, value: &str, secure: bool) -> Result<HeaderValue, ApiError> {
    let secure_attr = if secure { "; Secure" } else { "" };
    let cookie = format!(
        "{}={}; Max-Age={}; Path=/; HttpOnly; SameSite=None{}",
        name, value, COOKIE_MAX_AGE_SECS, secure_attr
    );
    HeaderValue::from_str(&cookie)
        .map_err(|_| ApiError::internal("cookie value contains invalid header characters"))
}

/// Build the response headers that set both session cookies.
pub fn auth_cookie_headers(
    access_token: &str,
    refresh_token: &str,
    secure: bool,
) -> Result<HeaderMap, ApiError> {
    let mut headers = HeaderMap::new();
    headers.append(SET_COOKIE, session_cookie(ACCESS_COOKIE, access_token, secure)?);
    headers.append(SET_COOKIE, session_cookie(REFRESH_COOKIE, refresh_token, secure)?);
    Ok(headers)
}

/// Extract a cookie value from a request's `Cookie` header.
pub fn cookie_value(headers: &HeaderMap, name: &str) -> Option<String> {
    let raw = headers.get(COOKIE)?.to_str().ok()?;
    for pair in raw.split(';') {
        let pair = pair.trim();
        if let Some((key, value)) = pair.split_once('=') {
            if key == name {
                return Some(value.to_string());
            }
        }
    }
    None
}
