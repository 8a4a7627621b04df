//! AppNest backend: serves CMS-backed app data as JSON and hosts the built
//! frontend.

mod admin_access;
mod cache;
mod cms_client;
mod config;
mod handlers;
mod request_context;
mod routes;
mod state;

use std::net::SocketAddr;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Default to info-level logs; override via RUST_LOG if needed.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = config::ServerConfig::from_env().context("invalid server configuration")?;

    tracing::info!("Starting AppNest backend server");
    tracing::info!("Static directory: {}", config.static_dir);
    tracing::info!(
        ttl_secs = config.cache_ttl.as_secs(),
        featured_count = config.featured_count,
        explicit_featured = config.explicit_featured,
        admin_token = config.admin_token.is_some(),
        "content settings"
    );

    let app_state = state::AppState::new(&config)?;
    tracing::info!("CMS endpoint: {}", app_state.cms_endpoint());

    let app = routes::create_router(app_state, &config.static_dir);

    let addr = config.listen_addr();
    tracing::info!("Listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    axum::serve(listener, app.into_make_service_with_connect_info::<SocketAddr>()).await?;

    Ok(())
}
