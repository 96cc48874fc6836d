// Main entry point - Dependency injection and server setup
mod application;
mod domain;
mod infrastructure;
mod presentation;

use std::{net::SocketAddr, sync::Arc};

use anyhow::Context;
use axum::{routing::get, Router};
use tower_http::compression::CompressionLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use crate::application::dashboard_service::DashboardService;
use crate::application::view_repository::ViewRepository;
use crate::infrastructure::config::{load_config, SourceKind};
use crate::infrastructure::http_repository::HttpViewRepository;
use crate::infrastructure::snapshot_repository::SnapshotRepository;
use crate::presentation::app_state::AppState;
use crate::presentation::handlers::{health_check, view_detail, view_list};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = load_config()?;

    // Create repository (infrastructure layer)
    let repository: Arc<dyn ViewRepository> = match config.source.kind {
        SourceKind::Http => Arc::new(HttpViewRepository::new(config.source.base_url.clone())),
        SourceKind::Snapshot => Arc::new(SnapshotRepository::new(&config.source.snapshot_path)),
    };
    tracing::info!(source = ?config.source.kind, "Using view source");

    // Create services (application layer)
    let state = Arc::new(AppState {
        dashboard_service: DashboardService::new(repository),
    });

    // Build router (presentation layer)
    let router = Router::new()
        .route("/healthz", get(health_check))
        .route("/dashboard", get(view_list))
        .route("/dashboard/:view", get(view_detail))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    let addr: SocketAddr = config
        .server
        .bind
        .parse()
        .with_context(|| format!("Invalid bind address {}", config.server.bind))?;
    tracing::info!(%addr, "Starting build-theatre dashboard");

    axum::serve(tokio::net::TcpListener::bind(addr).await?, router).await?;

    Ok(())
}
