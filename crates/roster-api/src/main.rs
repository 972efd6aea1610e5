//! # roster-api — Binary Entry Point
//!
//! Starts the Axum HTTP server for the Roster API. Binds to a
//! configurable port (default 8080).

use std::sync::Arc;

use roster_api::config::Config;
use roster_api::repository::PostgresPlayerRepository;
use roster_api::service::PlayerServiceImpl;
use roster_api::state::AppState;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    // Initialize structured tracing.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env();
    tracing::info!(?config, "Configuration loaded");

    // Connect to PostgreSQL and apply migrations. Startup proceeds
    // without a connection: every repository operation then fails
    // NotConnected and surfaces to clients as 503.
    let repository = match roster_api::db::init_pool(&config).await {
        Ok(pool) => PostgresPlayerRepository::new(pool),
        Err(e) => {
            tracing::warn!(
                error = %e,
                "Database unavailable — player endpoints will return 503"
            );
            PostgresPlayerRepository::disconnected()
        }
    };

    let service = Arc::new(PlayerServiceImpl::new(Arc::new(repository)));
    let state = AppState::new(service);
    let app = roster_api::app(state);

    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Roster API listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
