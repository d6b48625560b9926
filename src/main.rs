/**
 * Forkful Server Entry Point
 *
 * Startup order: environment, logging, configuration, database, background
 * purge task, router, listener.
 */

use forkful::server::{db, init};
use forkful::{AppConfig, AppState};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env if present.
    dotenv::dotenv().ok();

    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(&env_filter))
        .init();

    let config = AppConfig::from_env();
    let mode = if config.production { "production" } else { "development" };
    tracing::info!("Starting in {} mode", mode);

    let pool = db::connect(&config.database_url).await?;
    db::init_schema(&pool).await?;
    tracing::info!("Database ready at {}", config.database_url);

    init::spawn_session_purge(pool.clone());

    let port = config.port;
    let state = AppState::new(pool, config);
    let app = init::create_app(state);

    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Server running on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
