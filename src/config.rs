/**
 * Application Configuration
 *
 * Configuration is read from the environment exactly once, at process start,
 * and carried through the application as an explicit struct. Business logic
 * never reads environment variables itself; everything it needs arrives via
 * `AppConfig` (usually behind the shared `AppState`).
 *
 * # Configuration Sources
 *
 * Values come from environment variables (a `.env` file is loaded by `main`
 * before this runs), with development-friendly defaults for everything.
 * Production deployments are expected to set the JWT secrets and
 * `APP_ENV=production` explicitly.
 */

use std::env;

/// Default recipe search API, matching the upstream service the frontend
/// was built against.
const DEFAULT_RECIPE_BASE_URL: &str = "https://api.edamam.com/api/recipes/v2";

/// Application configuration, constructed once at startup.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Port the HTTP server listens on.
    pub port: u16,
    /// SQLite connection string.
    pub database_url: String,
    /// Signing secret for short-lived access tokens.
    pub access_secret: String,
    /// Signing secret for refresh tokens. Distinct from the access secret so
    /// one class of token can never be replayed as the other.
    pub refresh_secret: String,
    /// True when running in production mode (`APP_ENV=production`).
    /// Controls the `Secure` cookie attribute.
    pub production: bool,
    /// Origins allowed by the CORS layer (credentials are enabled, so a
    /// wildcard is not an option).
    pub allowed_origins: Vec<String>,
    /// Base URL of the external recipe search API.
    pub recipe_base_url: String,
    /// Application id for the recipe API.
    pub recipe_app_id: String,
    /// Application key for the recipe API.
    pub recipe_app_key: String,
}

impl AppConfig {
    /// Load configuration from the environment.
    ///
    /// Missing variables fall back to development defaults; a malformed
    /// `PORT` falls back to 5000 rather than aborting startup.
    pub fn from_env() -> Self {
        let port = env::var("PORT")
            .ok()
            .and_then(|p| p.parse::<u16>().ok())
            .unwrap_or(5000);

        let database_url = env::var("DATABASE_URL")
            .unwrap_or_else(|_| "sqlite:forkful.db?mode=rwc".to_string());

        let access_secret = env::var("JWT_ACCESS_SECRET").unwrap_or_else(|err| {
            tracing::warn!("Missing JWT_ACCESS_SECRET ({}), using development default", err);
            "dev-access-secret-change-in-production".to_string()
        });

        let refresh_secret = env::var("JWT_REFRESH_SECRET").unwrap_or_else(|err| {
            tracing::warn!("Missing JWT_REFRESH_SECRET ({}), using development default", err);
            "dev-refresh-secret-change-in-production".to_string()
        });

        let production = env::var("APP_ENV")
            .map(|mode| mode.eq_ignore_ascii_case("production"))
            .unwrap_or(false);

        let allowed_origins = env::var("ALLOWED_ORIGINS")
            .map(|origins| {
                origins
                    .split(',')
                    .map(|origin| origin.trim().to_string())
                    .filter(|origin| !origin.is_empty())
                    .collect()
            })
            .unwrap_or_else(|_| {
                vec![
                    "http://localhost:3000".to_string(),
                    "http://localhost:5000".to_string(),
                ]
            });

        let recipe_base_url =
            env::var("RECIPE_BASE_URL").unwrap_or_else(|_| DEFAULT_RECIPE_BASE_URL.to_string());
        let recipe_app_id = env::var("RECIPE_APP_ID").unwrap_or_default();
        let recipe_app_key = env::var("RECIPE_APP_KEY").unwrap_or_default();

        Self {
            port,
            database_url,
            access_secret,
            refresh_secret,
            production,
            allowed_origins,
            recipe_base_url,
            recipe_app_id,
            recipe_app_key,
        }
    }
}

impl Default for AppConfig {
    /// Development configuration used by tests: in-memory database, fixed
    /// distinct secrets, non-production cookies.
    fn default() -> Self {
        Self {
            port: 5000,
            database_url: "sqlite::memory:".to_string(),
            access_secret: "test-access-secret".to_string(),
            refresh_secret: "test-refresh-secret".to_string(),
            production: false,
            allowed_origins: vec!["http://localhost:3000".to_string()],
            recipe_base_url: DEFAULT_RECIPE_BASE_URL.to_string(),
            recipe_app_id: String::new(),
            recipe_app_key: String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_uses_distinct_secrets() {
        let config = AppConfig::default();
        assert_ne!(config.access_secret, config.refresh_secret);
    }

    #[test]
    fn default_config_is_not_production() {
        let config = AppConfig::default();
        assert!(!config.production);
        assert!(!config.allowed_origins.is_empty());
    }
}
