/**
 * Favorites Model and Queries
 *
 * One row per (account, recipe) pair, created when an account favorites a
 * recipe and deleted when it un-favorites it. All access is scoped by the
 * account id resolved by the session-check middleware.
 */

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

pub mod handlers;

pub use handlers::{add_favorite, list_favorites, remove_favorite};

/// A favorited recipe.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Favorite {
    pub account_id: String,
    pub recipe_id: String,
    pub created_at: DateTime<Utc>,
}

pub async fn insert_favorite(
    pool: &SqlitePool,
    account_id: &str,
    recipe_id: &str,
) -> Result<Favorite, sqlx::Error> {
    let favorite = sqlx::query_as::<_, Favorite>(
        r#"
        INSERT INTO favorites (account_id, recipe_id, created_at)
        VALUES ($1, $2, $3)
        RETURNING account_id, recipe_id, created_at
        "#,
    )
    .bind(account_id)
    .bind(recipe_id)
    .bind(Utc::now())
    .fetch_one(pool)
    .await?;

    Ok(favorite)
}

pub async fn find_favorite(
    pool: &SqlitePool,
    account_id: &str,
    recipe_id: &str,
) -> Result<Option<Favorite>, sqlx::Error> {
    let favorite = sqlx::query_as::<_, Favorite>(
        r#"
        SELECT account_id, recipe_id, created_at
        FROM favorites
        WHERE account_id = $1 AND recipe_id = $2
        "#,
    )
    .bind(account_id)
    .bind(recipe_id)
    .fetch_optional(pool)
    .await?;

    Ok(favorite)
}

/// Delete a favorite, returning the removed row if one existed.
pub async fn delete_favorite(
    pool: &SqlitePool,
    account_id: &str,
    recipe_id: &str,
) -> Result<Option<Favorite>, sqlx::Error> {
    let favorite = sqlx::query_as::<_, Favorite>(
        r#"
        DELETE FROM favorites
        WHERE account_id = $1 AND recipe_id = $2
        RETURNING account_id, recipe_id, created_at
        "#,
    )
    .bind(account_id)
    .bind(recipe_id)
    .fetch_optional(pool)
    .await?;

    Ok(favorite)
}

pub async fn list_for_account(
    pool: &SqlitePool,
    account_id: &str,
) -> Result<Vec<Favorite>, sqlx::Error> {
    let favorites = sqlx::query_as::<_, Favorite>(
        r#"
        SELECT account_id, recipe_id, created_at
        FROM favorites
        WHERE account_id = $1
        ORDER BY created_at
        "#,
    )
    .bind(account_id)
    .fetch_all(pool)
    .await?;

    Ok(favorites)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::server::db;

    async fn test_pool() -> SqlitePool {
        let pool = db::connect("sqlite::memory:").await.unwrap();
        db::init_schema(&pool).await.unwrap();
        pool
    }

    #[tokio::test]
    async fn test_insert_find_delete() {
        let pool = test_pool().await;

        let created = insert_favorite(&pool, "acct-1", "recipe-1").await.unwrap();
        assert_eq!(created.recipe_id, "recipe-1");

        assert!(find_favorite(&pool, "acct-1", "recipe-1").await.unwrap().is_some());

        let deleted = delete_favorite(&pool, "acct-1", "recipe-1").await.unwrap();
        assert!(deleted.is_some());
        assert!(find_favorite(&pool, "acct-1", "recipe-1").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_list_is_scoped_by_account() {
        let pool = test_pool().await;
        insert_favorite(&pool, "acct-1", "recipe-1").await.unwrap();
        insert_favorite(&pool, "acct-1", "recipe-2").await.unwrap();
        insert_favorite(&pool, "acct-2", "recipe-1").await.unwrap();

        let listed = list_for_account(&pool, "acct-1").await.unwrap();
        assert_eq!(listed.len(), 2);
        assert!(listed.iter().all(|f| f.account_id == "acct-1"));
    }

    #[tokio::test]
    async fn test_delete_missing_favorite() {
        let pool = test_pool().await;
        let deleted = delete_favorite(&pool, "acct-1", "recipe-9").await.unwrap();
        assert!(deleted.is_none());
    }
}
