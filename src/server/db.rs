/**
 * Database Connection and Schema
 *
 * SQLite via sqlx. The schema is applied idempotently at startup with
 * CREATE TABLE IF NOT EXISTS statements, which keeps test pools (in-memory
 * databases) self-contained.
 *
 * # Connection Pooling
 *
 * The pool is capped at a single connection. SQLite serializes writers
 * anyway, and `sqlite::memory:` would otherwise hand each pooled connection
 * its own private database.
 */

use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;

/// Connect to the database.
pub async fn connect(database_url: &str) -> Result<SqlitePool, sqlx::Error> {
    SqlitePoolOptions::new()
        .max_connections(1)
        .connect(database_url)
        .await
}

/// Apply the schema.
///
/// The UNIQUE constraint on `accounts.email` is the real enforcement of the
/// email-uniqueness invariant; the handler-level existence check only
/// exists to produce a friendly error message.
pub async fn init_schema(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS accounts (
            id TEXT PRIMARY KEY,
            email TEXT NOT NULL UNIQUE,
            password_hash TEXT NOT NULL,
            created_at TEXT NOT NULL,
            updated_at TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS refresh_tokens (
            token TEXT PRIMARY KEY,
            issued_at TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS favorites (
            account_id TEXT NOT NULL,
            recipe_id TEXT NOT NULL,
            created_at TEXT NOT NULL,
            PRIMARY KEY (account_id, recipe_id)
        )
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}
