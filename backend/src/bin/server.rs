//! Movie Catalog HTTP Server Binary
//!
//! This is the main entry point for the catalog REST API server.
//! It loads configuration, seeds the repository, sets up the HTTP router,
//! and starts serving requests.
//!
//! # Usage
//!
//! ```bash
//! # Run with the built-in two-movie catalog
//! cargo run --bin catalog-server
//!
//! # Start from a custom catalog
//! CATALOG_SEED_FILE=movies.json PORT=9000 cargo run --bin catalog-server
//! ```
//!
//! # Environment Variables
//!
//! - `CATALOG_CONFIG`: Path to a `catalog.toml` file
//! - `HOST`: Server host (default: 0.0.0.0)
//! - `PORT`: Server port (default: 8080)
//! - `CATALOG_SEED_FILE`: JSON array of movies to start with
//! - `RUST_LOG`: Log level (default: info)

use std::env;
use std::net::SocketAddr;

use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use movie_catalog::config::AppConfig;
use movie_catalog::db::RepositoryFactory;
use movie_catalog::http::{create_router, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    FmtSubscriber::builder()
        .with_max_level(
            env::var("RUST_LOG")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(Level::INFO),
        )
        .with_target(true)
        .with_thread_ids(true)
        .init();

    info!("Starting movie catalog server");

    let config = AppConfig::load()?;

    // The repository is owned by the application state, not a global
    let repository = RepositoryFactory::from_config(&config.catalog)?;
    info!(
        movies = repository.count().await?,
        "Repository initialized successfully"
    );

    // Create application state
    let state = AppState::new(repository);

    // Create router with all endpoints
    let app = create_router(state);

    let addr: SocketAddr = config.server.bind_address().parse()?;

    info!("Server listening on http://{}", addr);
    info!("Health check: http://{}/health", addr);

    // Start the server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
