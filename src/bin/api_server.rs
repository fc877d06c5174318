// API Server Binary Entry Point
//
// Purpose: serve the city catalog and comparisons over HTTP
// Usage: cargo run --features api --bin api_server

use daylight_compare::{create_router, AppConfig, AppState};
use std::net::SocketAddr;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing (structured logging)
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| {
                    // Default log level: info for our crate, warn for others
                    "daylight_compare=info,tower_http=debug,warn".into()
                }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting API server...");

    // Configuration from environment variables
    let config = AppConfig::from_env();

    tracing::info!("Configuration:");
    tracing::info!("  CITIES_DATA: {:?}", config.data_path);
    tracing::info!("  IMAGE_BASE_URL: {}", config.image_base_url);
    tracing::info!("  FOLDER_MAP: {:?}", config.folder_map_path);
    tracing::info!("  PORT: {}", config.port);

    let state = AppState::new(&config)?;
    tracing::info!("Application state initialized successfully");

    // Create router with all endpoints and middleware
    let app = create_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
