/**
 * Recipe Search Proxy
 *
 * GET /api/recipes
 *
 * Forwards the request's query parameters to the external recipe search API
 * with the application credentials from configuration, and relays the
 * upstream status and JSON body verbatim. No result shaping happens here.
 */

use std::collections::HashMap;

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::Json;
use serde_json::Value;

use crate::error::ApiError;
use crate::server::state::AppState;

/// Proxy a recipe search to the upstream API.
///
/// # Errors
///
/// * `502` - the upstream could not be reached or answered non-JSON
pub async fn search_recipes(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    let config = &state.config;

    let mut query: Vec<(String, String)> = vec![
        ("type".to_string(), "public".to_string()),
        ("app_id".to_string(), config.recipe_app_id.clone()),
        ("app_key".to_string(), config.recipe_app_key.clone()),
    ];
    // Forwarded caller parameters never override the credentials.
    query.extend(
        params
            .into_iter()
            .filter(|(key, _)| key != "type" && key != "app_id" && key != "app_key"),
    );

    tracing::debug!("Recipe search: {} params forwarded", query.len() - 3);

    let response = state
        .http
        .get(&config.recipe_base_url)
        .query(&query)
        .send()
        .await?;

    let status = StatusCode::from_u16(response.status().as_u16())
        .unwrap_or(StatusCode::BAD_GATEWAY);
    let body: Value = response.json().await?;

    Ok((status, Json(body)))
}
