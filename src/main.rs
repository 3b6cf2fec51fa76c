//! Portal access server.
//!
//! Reads the configuration path from `PORTAL_ACCESS_CONFIG` (built-in
//! defaults when unset) and binds to `PORTAL_ACCESS_ADDR`
//! (default `0.0.0.0:3000`).

use std::net::SocketAddr;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use portal_access::api::{AppState, create_router};
use portal_access::config::ConfigLoader;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "portal_access=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = match std::env::var("PORTAL_ACCESS_CONFIG") {
        Ok(path) => ConfigLoader::load(&path)?,
        Err(_) => {
            tracing::info!("PORTAL_ACCESS_CONFIG not set, using built-in configuration");
            ConfigLoader::builtin()
        }
    };

    let addr: SocketAddr = std::env::var("PORTAL_ACCESS_ADDR")
        .unwrap_or_else(|_| "0.0.0.0:3000".to_string())
        .parse()?;

    let app = create_router(AppState::new(config));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Portal access server listening on {}", addr);

    axum::serve(listener, app).await?;
    Ok(())
}
