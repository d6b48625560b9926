/**
 * Session Token Store
 *
 * Persistence for issued refresh tokens. Presence in this store is the sole
 * authority for refresh-token revocation: a signed, non-expired token that
 * is absent here has been logged out (or aged past the retention window).
 *
 * Rows are written on every successful registration, login, and password
 * change, deleted explicitly by logout, and swept by a periodic purge once
 * older than the retention window. Lookups filter by the same window, so an
 * expired row is unreachable even between sweeps.
 */

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

/// How long a stored refresh token stays live: 1 day.
pub const RETENTION_WINDOW_HOURS: i64 = 24;

/// How often the background sweep runs.
pub const PURGE_INTERVAL_SECS: u64 = 60 * 60;

/// One issued refresh token.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct SessionToken {
    /// The refresh token's raw value.
    pub token: String,
    /// When the token was issued.
    pub issued_at: DateTime<Utc>,
}

fn retention_cutoff() -> DateTime<Utc> {
    Utc::now() - Duration::hours(RETENTION_WINDOW_HOURS)
}

/// Record a freshly issued refresh token.
pub async fn insert_token(pool: &SqlitePool, token: &str) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        INSERT INTO refresh_tokens (token, issued_at)
        VALUES ($1, $2)
        "#,
    )
    .bind(token)
    .bind(Utc::now())
    .execute(pool)
    .await?;

    Ok(())
}

/// Look up a refresh token, honoring the retention window.
///
/// Tokens issued more than `RETENTION_WINDOW_HOURS` ago are reported as
/// absent even if the purge has not removed the row yet.
pub async fn find_token(
    pool: &SqlitePool,
    token: &str,
) -> Result<Option<SessionToken>, sqlx::Error> {
    let record = sqlx::query_as::<_, SessionToken>(
        r#"
        SELECT token, issued_at
        FROM refresh_tokens
        WHERE token = $1 AND issued_at >= $2
        "#,
    )
    .bind(token)
    .bind(retention_cutoff())
    .fetch_optional(pool)
    .await?;

    Ok(record)
}

/// Delete a refresh token.
///
/// # Returns
/// Whether a row was actually removed. Logout ignores the answer - deleting
/// an already-absent token is a success.
pub async fn delete_token(pool: &SqlitePool, token: &str) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM refresh_tokens WHERE token = $1")
        .bind(token)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}

/// Remove all tokens older than the retention window.
///
/// # Returns
/// Number of rows removed.
pub async fn purge_expired(pool: &SqlitePool) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("DELETE FROM refresh_tokens WHERE issued_at < $1")
        .bind(retention_cutoff())
        .execute(pool)
        .await?;

    Ok(result.rows_affected())
}

/// Count stored tokens. Used by tests asserting issuance side effects.
pub async fn count_tokens(pool: &SqlitePool) -> Result<i64, sqlx::Error> {
    let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM refresh_tokens")
        .fetch_one(pool)
        .await?;
    Ok(count)
}

/// Backdate a token's issuance time.
///
/// Test-only hook for simulating tokens that have aged past the retention
/// window without waiting a day.
pub async fn backdate_token(
    pool: &SqlitePool,
    token: &str,
    issued_at: DateTime<Utc>,
) -> Result<(), sqlx::Error> {
    sqlx::query("UPDATE refresh_tokens SET issued_at = $1 WHERE token = $2")
        .bind(issued_at)
        .bind(token)
        .execute(pool)
        .await?;

    Ok(())
}
