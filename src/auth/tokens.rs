/**
 * Token Service
 *
 * JWT issuance and verification for the two token classes used by the
 * session lifecycle:
 *
 * - **Access tokens**: short-lived (minutes), signed with the access secret.
 * - **Refresh tokens**: longer-lived (hours), signed with their own secret,
 *   and additionally persisted in the session store at issuance.
 *
 * The two secrets are distinct so that a token of one class never verifies
 * as the other. The service itself is pure: it holds the secrets from
 * `AppConfig` and performs no I/O.
 */

use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};
use thiserror::Error;

/// Access token lifetime: 15 minutes.
pub const ACCESS_TOKEN_TTL_SECS: i64 = 15 * 60;

/// Refresh token lifetime: 12 hours.
pub const REFRESH_TOKEN_TTL_SECS: i64 = 12 * 60 * 60;

/// JWT claims carried by both token classes.
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// Account id the token was issued for.
    pub sub: String,
    /// Expiration time (Unix timestamp).
    pub exp: i64,
    /// Issued-at time (Unix timestamp).
    pub iat: i64,
    /// Unique token id. Two tokens issued for the same account in the same
    /// second must still differ, since the session store keys on the raw
    /// token value.
    pub jti: String,
}

/// Token verification failures.
///
/// Callers treat both variants as session-invalid; the split exists for
/// logging and tests.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TokenError {
    /// Signature verified but the token is past its expiry.
    #[error("Token expired")]
    Expired,
    /// Signature mismatch, malformed token, or claims that fail validation.
    #[error("Invalid token")]
    Invalid,
}

impl From<jsonwebtoken::errors::Error> for TokenError {
    fn from(err: jsonwebtoken::errors::Error) -> Self {
        match err.kind() {
            jsonwebtoken::errors::ErrorKind::ExpiredSignature => Self::Expired,
            _ => Self::Invalid,
        }
    }
}

/// Issues and verifies the access/refresh token pair.
#[derive(Debug, Clone)]
pub struct TokenService {
    access_secret: String,
    refresh_secret: String,
}

impl TokenService {
    pub fn new(access_secret: impl Into<String>, refresh_secret: impl Into<String>) -> Self {
        Self {
            access_secret: access_secret.into(),
            refresh_secret: refresh_secret.into(),
        }
    }

    /// Issue a short-lived access token for an account.
    pub fn issue_access(&self, account_id: &str) -> Result<String, TokenError> {
        self.issue(account_id, &self.access_secret, ACCESS_TOKEN_TTL_SECS)
    }

    /// Issue a refresh token for an account.
    ///
    /// The caller is responsible for persisting the returned token in the
    /// session store; issuance alone does not record it anywhere.
    pub fn issue_refresh(&self, account_id: &str) -> Result<String, TokenError> {
        self.issue(account_id, &self.refresh_secret, REFRESH_TOKEN_TTL_SECS)
    }

    /// Verify an access token and return the embedded account id.
    pub fn decode_access(&self, token: &str) -> Result<String, TokenError> {
        Self::decode_with(token, &self.access_secret)
    }

    /// Verify a refresh token and return the embedded account id.
    ///
    /// Signature and expiry only; presence in the session store is a
    /// separate question answered by `auth::sessions`.
    pub fn decode_refresh(&self, token: &str) -> Result<String, TokenError> {
        Self::decode_with(token, &self.refresh_secret)
    }

    /// Issue a token with an explicit TTL in seconds.
    ///
    /// A negative TTL produces an already-expired token; tests use this to
    /// exercise expiry handling without sleeping.
    pub fn issue_with_ttl(
        &self,
        account_id: &str,
        secret_of: TokenKind,
        ttl_secs: i64,
    ) -> Result<String, TokenError> {
        let secret = match secret_of {
            TokenKind::Access => &self.access_secret,
            TokenKind::Refresh => &self.refresh_secret,
        };
        self.issue(account_id, secret, ttl_secs)
    }

    fn issue(&self, account_id: &str, secret: &str, ttl_secs: i64) -> Result<String, TokenError> {
        let now = unix_now();
        let claims = Claims {
            sub: account_id.to_string(),
            exp: now + ttl_secs,
            iat: now,
            jti: uuid::Uuid::new_v4().to_string(),
        };

        let key = EncodingKey::from_secret(secret.as_ref());
        encode(&Header::default(), &claims, &key).map_err(TokenError::from)
    }

    fn decode_with(token: &str, secret: &str) -> Result<String, TokenError> {
        let key = DecodingKey::from_secret(secret.as_ref());
        let validation = Validation::default();
        let token_data = decode::<Claims>(token, &key, &validation)?;
        Ok(token_data.claims.sub)
    }
}

/// Which token class's secret to sign with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Access,
    Refresh,
}

fn unix_now() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0)
}
