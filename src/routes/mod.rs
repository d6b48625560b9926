/**
 * API Route Configuration
 *
 * # Routes
 *
 * ## Authentication (public)
 * - `POST /api/registration` - Register a new account
 * - `POST /api/login` - Authenticate
 * - `POST /api/change-password` - Change password (old password required)
 * - `DELETE /api/logout` - Revoke the refresh token from the cookie
 *
 * ## Favorites (session required)
 * - `GET /api/user/favorites` - List the account's favorites
 * - `POST /api/user/favorites` - Add a favorite
 * - `DELETE /api/user/favorites/{recipeId}` - Remove a favorite
 *
 * ## Recipes (public)
 * - `GET /api/recipes` - Proxy a search to the external recipe API
 */

use axum::middleware::from_fn_with_state;
use axum::routing::{delete, get, post};
use axum::Router;

use crate::auth::{change_password, login, logout, register};
use crate::favorites::{add_favorite, list_favorites, remove_favorite};
use crate::middleware::session_check;
use crate::recipes::search_recipes;
use crate::server::state::AppState;

/// Build the API router.
pub fn configure_api_routes(state: AppState) -> Router {
    let favorites = Router::new()
        .route("/api/user/favorites", get(list_favorites).post(add_favorite))
        .route("/api/user/favorites/{recipe_id}", delete(remove_favorite))
        .route_layer(from_fn_with_state(state.clone(), session_check));

    Router::new()
        .route("/api/registration", post(register))
        .route("/api/login", post(login))
        .route("/api/change-password", post(change_password))
        .route("/api/logout", delete(logout))
        .route("/api/recipes", get(search_recipes))
        .merge(favorites)
        .with_state(state)
}
