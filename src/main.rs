mod actor_framework;
mod app_system;
mod catalog;
mod clients;
mod club_actor;
mod domain;
mod http;
mod order_actor;
mod reservation;

#[cfg(test)]
mod mock_framework;

use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;
use tracing::{error, info};

use crate::app_system::{load_seed, setup_tracing, AppConfig, ClubSystem};
use crate::http::{build_router, AppState};
use crate::reservation::ReservationEngine;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    setup_tracing();

    let config = AppConfig::load()?;
    let clubs = load_seed(&config.clubs_seed_path)?;
    info!(clubs = clubs.len(), seed = %config.clubs_seed_path.display(), "Seed loaded");

    let system = ClubSystem::start(config.actor_buffer_size, clubs)?;
    let engine = ReservationEngine::new(Arc::new(system.catalog()));
    let app = build_router(AppState::new(engine), &config);

    let addr = config.bind_address();
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("cannot bind {}", addr))?;
    info!(%addr, "Listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    system.shutdown().await?;
    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Shutdown signal received"),
        Err(e) => error!(error = %e, "Cannot listen for shutdown signal"),
    }
}
