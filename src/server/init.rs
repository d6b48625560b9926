/**
 * Application Construction
 *
 * Builds the Axum app from shared state: routes, CORS, and the background
 * refresh-token sweep.
 *
 * # CORS
 *
 * The frontend runs on a different origin and authenticates with cookies,
 * so the CORS layer enables credentials and therefore needs an explicit
 * origin allow-list - a wildcard is rejected by browsers when credentials
 * are on.
 */

use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderValue, Method};
use axum::Router;
use sqlx::SqlitePool;
use tower_http::cors::CorsLayer;

use crate::auth::sessions;
use crate::routes::configure_api_routes;
use crate::server::state::AppState;

/// Create the Axum application.
pub fn create_app(state: AppState) -> Router {
    let cors = cors_layer(&state.config.allowed_origins);

    configure_api_routes(state)
        .layer(cors)
        .fallback(|| async { "404 Not Found" })
}

fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| {
            HeaderValue::from_str(origin)
                .map_err(|_| tracing::warn!("Ignoring malformed CORS origin: {}", origin))
                .ok()
        })
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST, Method::DELETE, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE])
        .allow_credentials(true)
}

/// Spawn the hourly sweep that removes refresh tokens older than the
/// retention window. Lookups already filter by the window, so the sweep is
/// housekeeping rather than a correctness requirement.
pub fn spawn_session_purge(pool: SqlitePool) {
    tokio::spawn(async move {
        let mut interval =
            tokio::time::interval(std::time::Duration::from_secs(sessions::PURGE_INTERVAL_SECS));
        loop {
            interval.tick().await;
            match sessions::purge_expired(&pool).await {
                Ok(0) => {}
                Ok(removed) => tracing::info!("Purged {} expired refresh tokens", removed),
                Err(err) => tracing::error!("Refresh token purge failed: {:?}", err),
            }
        }
    });
}
