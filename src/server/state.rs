/**
 * Application State
 *
 * The central state container shared by all handlers. Everything in it is
 * cheaply cloneable: the sqlx pool and reqwest client clone by handle, the
 * config by `Arc`, and the token service holds only its two secrets.
 *
 * Handlers hold no state of their own across requests; the stores behind
 * the pool own all persistent data.
 */

use std::sync::Arc;

use sqlx::SqlitePool;

use crate::auth::tokens::TokenService;
use crate::config::AppConfig;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool (credential, session, and favorites stores).
    pub pool: SqlitePool,
    /// JWT issuance and verification.
    pub tokens: TokenService,
    /// Process-wide configuration.
    pub config: Arc<AppConfig>,
    /// Shared outbound HTTP client for the recipe proxy.
    pub http: reqwest::Client,
}

impl AppState {
    pub fn new(pool: SqlitePool, config: AppConfig) -> Self {
        let tokens = TokenService::new(&config.access_secret, &config.refresh_secret);
        Self {
            pool,
            tokens,
            config: Arc::new(config),
            http: reqwest::Client::new(),
        }
    }
}
