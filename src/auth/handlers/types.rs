/**
 * Auth Request and Response Types
 *
 * Explicit schemas for every auth endpoint. Field names follow the JSON
 * contract the frontend already speaks (camelCase).
 */

use serde::{Deserialize, Serialize};

/// Registration request.
#[derive(Debug, Deserialize, Serialize)]
pub struct RegisterRequest {
    /// Email for the new account (must be unused).
    pub email: String,
    /// Plaintext password (hashed before storage).
    pub password: String,
}

/// Login request.
#[derive(Debug, Deserialize, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Change-password request.
#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangePasswordRequest {
    pub email: String,
    /// Current password, verified before anything changes.
    pub password: String,
    pub new_password: String,
}

/// Success body for register, login, and change-password.
///
/// The tokens themselves travel only as cookies.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    pub account_id: String,
    pub email: String,
}

/// Plain message body (logout).
#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}
