/**
 * API Error Types
 *
 * This module defines the error taxonomy for the HTTP API and its mapping
 * to responses. Every handler returns `Result<_, ApiError>`, so every
 * failure path produces a real response rather than a hung request.
 *
 * # Error Categories
 *
 * - Validation failures (structured field-error list, 400)
 * - Auth workflow failures (duplicate email, unknown account, bad password)
 * - Session failures (missing/invalid/expired token, 401)
 * - Store failures (database errors, surfaced with the raw error text)
 * - Upstream failures (recipe API transport errors, 502)
 *
 * # Status Codes
 *
 * The credential-mismatch codes are intentionally uneven: login answers a
 * bare 403, change-password a 400. Both variants exist separately so the
 * split stays visible in the type rather than hidden behind a flag.
 */

use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde::Serialize;
use serde_json::json;
use thiserror::Error;

use crate::auth::tokens::TokenError;

/// A single field-level validation failure.
///
/// Serialized as `{"field": ..., "message": ...}`; validation responses are
/// a JSON array of these.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct FieldError {
    /// Name of the offending request field.
    pub field: String,
    /// Human-readable description of what is wrong with it.
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// All errors the API can answer with.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Malformed input; carries the full list of field errors.
    #[error("validation failed")]
    Validation(Vec<FieldError>),

    /// Registration attempted with an email that already has an account.
    #[error("Email is already in use")]
    DuplicateEmail,

    /// No account matches the supplied email.
    #[error("Account not found")]
    AccountNotFound,

    /// Login password did not match. Answered as a bare 403.
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Change-password old password did not match. Answered as a 400,
    /// unlike login's 403.
    #[error("Password does not match")]
    PasswordMismatch,

    /// Session check failed: cookie missing, or token invalid/expired.
    #[error("Unauthorized")]
    Unauthorized,

    /// The account already favorited this recipe.
    #[error("Recipe is already in favorites")]
    FavoriteExists,

    /// No favorite record to remove.
    #[error("Favorite not found")]
    FavoriteNotFound,

    /// Token issuance/verification failure surfaced directly.
    #[error(transparent)]
    Token(#[from] TokenError),

    /// Database error. Surfaced to the client with the raw error text,
    /// matching the behavior this service replaces.
    #[error("{0}")]
    Store(#[from] sqlx::Error),

    /// The external recipe API could not be reached.
    #[error("Recipe service unavailable: {0}")]
    Upstream(#[from] reqwest::Error),

    /// Anything that should never surface in normal operation.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApiError {
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::DuplicateEmail => StatusCode::BAD_REQUEST,
            Self::AccountNotFound => StatusCode::BAD_REQUEST,
            Self::InvalidCredentials => StatusCode::FORBIDDEN,
            Self::PasswordMismatch => StatusCode::BAD_REQUEST,
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::FavoriteExists => StatusCode::BAD_REQUEST,
            Self::FavoriteNotFound => StatusCode::BAD_REQUEST,
            Self::Token(_) => StatusCode::UNAUTHORIZED,
            Self::Store(_) => StatusCode::BAD_REQUEST,
            Self::Upstream(_) => StatusCode::BAD_GATEWAY,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        match self {
            Self::Validation(errors) => (status, Json(json!(errors))).into_response(),
            Self::Store(err) => {
                tracing::error!("Store error surfaced to client: {:?}", err);
                (status, Json(json!({ "message": err.to_string() }))).into_response()
            }
            Self::Internal(message) => {
                tracing::error!("Internal error: {}", message);
                (status, Json(json!({ "message": message }))).into_response()
            }
            other => (status, Json(json!({ "message": other.to_string() }))).into_response(),
        }
    }
}
