use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use jobboard_api::jobs::handlers::refresh_catalog;
use jobboard_api::jobs::HttpJobFeed;
use jobboard_api::{build_router, AppState, Config};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={}",
                env!("CARGO_CRATE_NAME"),
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Job Board API v{}", env!("CARGO_PKG_VERSION"));

    let feed = HttpJobFeed::new(config.feed_url.clone(), config.feed_timeout)?;
    info!(
        "Job feed client initialized ({}, timeout {:?})",
        feed.url(),
        config.feed_timeout
    );

    let state = AppState::new(config.clone(), Arc::new(feed));

    // Initial load; a failure is surfaced by GET /api/v1/jobs until a refresh succeeds
    if let Err(e) = refresh_catalog(&state).await {
        warn!("Initial job feed load failed: {e}");
    }

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
