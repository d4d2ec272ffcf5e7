// Main entry point - Dependency injection and server setup
mod application;
mod domain;
mod infrastructure;
mod presentation;

use std::sync::Arc;

use anyhow::Context;
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::compression::CompressionLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use crate::application::dashboard_service::DashboardService;
use crate::application::shot_repository::ShotRepository;
use crate::application::shot_store::ShotStore;
use crate::infrastructure::config::load_dashboard_config;
use crate::infrastructure::csv_repository::CsvShotRepository;
use crate::presentation::app_state::AppState;
use crate::presentation::handlers::{filter_options, health_check, render_view};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Load configuration
    let config = load_dashboard_config().context("Failed to load dashboard configuration")?;
    let view_settings = config.view_settings()?;

    // Load the shot export once; it stays read-only from here on
    let repository = CsvShotRepository::new(config.data.path.clone());
    let shots = repository.load_shots().await?;
    let store = ShotStore::new(shots, config.data.max_records)?;

    tracing::info!(
        "View mode {:?} with {} lateral zones",
        view_settings.mode,
        view_settings.geometry.zone_count
    );

    // A perspective view needs exactly two players
    let dashboard_service =
        DashboardService::new(store, view_settings.geometry, view_settings.mode)?;

    let state = Arc::new(AppState { dashboard_service });

    let router = Router::new()
        .route("/healthz", get(health_check))
        .route("/options", get(filter_options))
        .route("/render", post(render_view))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    let addr = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    tracing::info!("Starting court-analytics service on {}", addr);

    axum::serve(listener, router).await?;

    Ok(())
}
