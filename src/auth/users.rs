/**
 * Account Model and Credential-Store Queries
 *
 * One row per account: server-generated UUID id, unique email, bcrypt
 * password hash. Accounts are created on registration and their hash is
 * rewritten on password change; nothing deletes them.
 *
 * Email uniqueness is checked read-then-write by the registration handler
 * for the friendly error, and enforced for real by the UNIQUE constraint on
 * the column - a concurrent duplicate insert loses with a database error
 * instead of silently creating a second account.
 */

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

/// Account record as stored in the `accounts` table.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Account {
    /// Unique account id (UUID v4, generated server-side).
    pub id: String,
    /// Account email (unique).
    pub email: String,
    /// Bcrypt password hash.
    pub password_hash: String,
    /// Created at timestamp.
    pub created_at: DateTime<Utc>,
    /// Updated at timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Create a new account.
///
/// # Arguments
/// * `pool` - Database connection pool
/// * `email` - Account email
/// * `password_hash` - Bcrypt hash of the password
///
/// # Returns
/// The created account, or the database error (including the UNIQUE
/// violation when a concurrent registration won the race).
pub async fn create_account(
    pool: &SqlitePool,
    email: &str,
    password_hash: &str,
) -> Result<Account, sqlx::Error> {
    let id = uuid::Uuid::new_v4().to_string();
    let now = Utc::now();

    let account = sqlx::query_as::<_, Account>(
        r#"
        INSERT INTO accounts (id, email, password_hash, created_at, updated_at)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING id, email, password_hash, created_at, updated_at
        "#,
    )
    .bind(&id)
    .bind(email)
    .bind(password_hash)
    .bind(now)
    .bind(now)
    .fetch_one(pool)
    .await?;

    Ok(account)
}

/// Get an account by email.
pub async fn find_by_email(
    pool: &SqlitePool,
    email: &str,
) -> Result<Option<Account>, sqlx::Error> {
    let account = sqlx::query_as::<_, Account>(
        r#"
        SELECT id, email, password_hash, created_at, updated_at
        FROM accounts
        WHERE email = $1
        "#,
    )
    .bind(email)
    .fetch_optional(pool)
    .await?;

    Ok(account)
}

/// Replace an account's password hash.
///
/// # Returns
/// The updated account, or `sqlx::Error::RowNotFound` if no account has
/// that email.
pub async fn update_password(
    pool: &SqlitePool,
    email: &str,
    password_hash: &str,
) -> Result<Account, sqlx::Error> {
    let now = Utc::now();

    let account = sqlx::query_as::<_, Account>(
        r#"
        UPDATE accounts
        SET password_hash = $1, updated_at = $2
        WHERE email = $3
        RETURNING id, email, password_hash, created_at, updated_at
        "#,
    )
    .bind(password_hash)
    .bind(now)
    .bind(email)
    .fetch_one(pool)
    .await?;

    Ok(account)
}

/// Count all accounts. Used by tests asserting uniqueness invariants.
pub async fn count_accounts(pool: &SqlitePool) -> Result<i64, sqlx::Error> {
    let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM accounts")
        .fetch_one(pool)
        .await?;
    Ok(count)
}
