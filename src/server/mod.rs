//! HTTP API for the commit pacing dashboard.
//!
//! Exposes the aggregation endpoint the original dashboard polled,
//! plus goal persistence and a combined progress projection.

pub mod error;
pub mod handlers;

use anyhow::{Context, Result};
use axum::routing::get;
use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::domain::models::ServerConfig;

pub use handlers::AppState;

/// Build the API router.
pub fn build_router(state: AppState, enable_cors: bool) -> Router {
    let mut router = Router::new()
        .route("/health", get(handlers::health))
        .route("/commits", get(handlers::get_commits))
        .route("/progress", get(handlers::get_progress))
        .route("/goal", get(handlers::get_goal).put(handlers::put_goal))
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    if enable_cors {
        router = router.layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        );
    }

    router
}

/// Bind and serve the API until the process is stopped.
pub async fn serve(config: &ServerConfig, state: AppState) -> Result<()> {
    let app = build_router(state, config.enable_cors);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = TcpListener::bind(&addr)
        .await
        .context(format!("Failed to bind {addr}"))?;

    info!("pacer HTTP server listening on {addr}");

    axum::serve(listener, app)
        .await
        .context("HTTP server terminated")?;

    Ok(())
}
