/**
 * Favorites Handlers
 *
 * CRUD over an account's favorites list. All three endpoints sit behind the
 * session-check middleware; the account id arrives via request extensions.
 */

use axum::extract::{Path, State};
use axum::response::Json;
use axum::Extension;
use serde::{Deserialize, Serialize};

use crate::auth::validation;
use crate::error::ApiError;
use crate::favorites::{self, Favorite};
use crate::middleware::CurrentAccount;
use crate::server::state::AppState;

/// Add-favorite request body.
#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddFavoriteRequest {
    pub recipe_id: String,
}

/// Add a recipe to the account's favorites.
///
/// # Errors
///
/// * `400` with a field-error list - empty recipe id
/// * `400` - the account already favorited this recipe
pub async fn add_favorite(
    State(state): State<AppState>,
    Extension(account): Extension<CurrentAccount>,
    Json(request): Json<AddFavoriteRequest>,
) -> Result<Json<Favorite>, ApiError> {
    let errors = validation::validate_recipe_id(&request.recipe_id);
    if !errors.is_empty() {
        return Err(ApiError::Validation(errors));
    }

    let existing =
        favorites::find_favorite(&state.pool, &account.account_id, &request.recipe_id).await?;
    if existing.is_some() {
        return Err(ApiError::FavoriteExists);
    }

    let favorite =
        favorites::insert_favorite(&state.pool, &account.account_id, &request.recipe_id).await?;

    tracing::info!(
        "Favorite added: account {} recipe {}",
        account.account_id,
        favorite.recipe_id
    );

    Ok(Json(favorite))
}

/// Remove a recipe from the account's favorites and return the removed
/// record.
pub async fn remove_favorite(
    State(state): State<AppState>,
    Extension(account): Extension<CurrentAccount>,
    Path(recipe_id): Path<String>,
) -> Result<Json<Favorite>, ApiError> {
    let deleted =
        favorites::delete_favorite(&state.pool, &account.account_id, &recipe_id).await?;

    match deleted {
        Some(favorite) => {
            tracing::info!(
                "Favorite removed: account {} recipe {}",
                account.account_id,
                recipe_id
            );
            Ok(Json(favorite))
        }
        None => Err(ApiError::FavoriteNotFound),
    }
}

/// List the account's favorites.
pub async fn list_favorites(
    State(state): State<AppState>,
    Extension(account): Extension<CurrentAccount>,
) -> Result<Json<Vec<Favorite>>, ApiError> {
    let favorites = favorites::list_for_account(&state.pool, &account.account_id).await?;
    Ok(Json(favorites))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::server::db;

    async fn test_state() -> AppState {
        let pool = db::connect("sqlite::memory:").await.unwrap();
        db::init_schema(&pool).await.unwrap();
        AppState::new(pool, AppConfig::default())
    }

    fn account(id: &str) -> Extension<CurrentAccount> {
        Extension(CurrentAccount {
            account_id: id.to_string(),
        })
    }

    fn add_request(recipe_id: &str) -> Json<AddFavoriteRequest> {
        Json(AddFavoriteRequest {
            recipe_id: recipe_id.to_string(),
        })
    }

    #[tokio::test]
    async fn test_add_and_list() {
        let state = test_state().await;

        let created = add_favorite(State(state.clone()), account("acct-1"), add_request("recipe-1"))
            .await
            .unwrap();
        assert_eq!(created.recipe_id, "recipe-1");
        assert_eq!(created.account_id, "acct-1");

        let listed = list_favorites(State(state), account("acct-1")).await.unwrap();
        assert_eq!(listed.len(), 1);
    }

    #[tokio::test]
    async fn test_add_duplicate_rejected() {
        let state = test_state().await;
        add_favorite(State(state.clone()), account("acct-1"), add_request("recipe-1"))
            .await
            .unwrap();

        let result =
            add_favorite(State(state), account("acct-1"), add_request("recipe-1")).await;
        assert!(matches!(result, Err(ApiError::FavoriteExists)));
    }

    #[tokio::test]
    async fn test_same_recipe_different_accounts() {
        let state = test_state().await;
        add_favorite(State(state.clone()), account("acct-1"), add_request("recipe-1"))
            .await
            .unwrap();
        // The duplicate check is per account, not global.
        add_favorite(State(state), account("acct-2"), add_request("recipe-1"))
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_remove_returns_record() {
        let state = test_state().await;
        add_favorite(State(state.clone()), account("acct-1"), add_request("recipe-1"))
            .await
            .unwrap();

        let removed = remove_favorite(
            State(state.clone()),
            account("acct-1"),
            Path("recipe-1".to_string()),
        )
        .await
        .unwrap();
        assert_eq!(removed.recipe_id, "recipe-1");

        let result =
            remove_favorite(State(state), account("acct-1"), Path("recipe-1".to_string())).await;
        assert!(matches!(result, Err(ApiError::FavoriteNotFound)));
    }

    #[tokio::test]
    async fn test_add_requires_recipe_id() {
        let state = test_state().await;
        let result = add_favorite(State(state), account("acct-1"), add_request("  ")).await;
        assert!(matches!(result, Err(ApiError::Validation(_))));
    }
}
