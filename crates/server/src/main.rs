//! HTTP entry point for the film catalog query service.
//!
//! Reads configuration from the environment (and `.env` if present),
//! connects to the upstream film-data service, and serves the catalog API.

use anyhow::{Context, Result};
use tokio::net::TcpListener;
use tracing::{debug, info};

use server::{build_app_router, FilmCatalogService, ServerConfig};
use sources::{CatalogFetcher, HttpFilmProvider};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                tracing_subscriber::EnvFilter::new(
                    "info,server=debug,pipeline=debug,sources=debug,tower_http=debug",
                )
            }),
        )
        .init();

    let config = ServerConfig::from_env().context("Failed to load server configuration")?;
    info!(host = %config.host, port = %config.port, upstream = %config.upstream_url, "Loaded server configuration");

    let provider = match config.upstream_timeout {
        Some(timeout) => HttpFilmProvider::with_timeout(&config.upstream_url, timeout)
            .context("Failed to build upstream HTTP client")?,
        None => HttpFilmProvider::new(&config.upstream_url),
    };
    debug!(base_url = provider.base_url(), "Upstream film provider ready");
    let service = FilmCatalogService::new(CatalogFetcher::from_provider(provider));
    let app = build_app_router(service);

    let listener = TcpListener::bind(config.bind_addr())
        .await
        .with_context(|| format!("Failed to bind {}", config.bind_addr()))?;
    info!("Film catalog listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .await
        .context("Server error")?;

    Ok(())
}
