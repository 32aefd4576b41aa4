//! FleetLease API Server
//!
//! Keeps the fleet-leasing domain consistent: legal entities own fleets,
//! fleets hold vehicles, drivers sign date-bounded contracts and check
//! vehicles out under them.
//! Uses hexagonal (ports & adapters) architecture.

use std::net::SocketAddr;

use anyhow::Context;
use axum::Router;
use sea_orm::Database;
use tower_http::cors::{Any, CorsLayer};
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod adapters;
mod app;
mod config;
mod domain;
mod entity;
mod error;
mod handlers;
mod state;

#[cfg(test)]
mod test_utils;


use adapters::{ensure_schema, LicenseValidatorClient};
use config::Config;
use domain::ports::{system_clock, uuid_generator};
use state::{AppState, InMemory, Postgres, Repositories};

const MAX_BODY_BYTES: usize = 1024 * 1024;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;
    config.validate()?;

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log_level.as_str().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting FleetLease API...");

    let validator = LicenseValidatorClient::new(
        config.license_validator_url.clone(),
        config.license_validator_timeout,
    )?;
    if !validator.is_configured() {
        tracing::warn!("LICENSE_VALIDATOR_URL not set; driver registration will fail");
    }

    let routes = match &config.database_url {
        Some(url) => {
            tracing::info!("Connecting to database...");
            let db = Database::connect(url)
                .await
                .context("Failed to connect to database")?;
            tracing::info!("Database connected");

            if config.run_migrations {
                ensure_schema(&db).await?;
            }

            let state = AppState::<Postgres>::new(
                Repositories::postgres(db, validator),
                uuid_generator(),
                system_clock(),
            );
            handlers::router(state)
        }
        None => {
            tracing::warn!("DATABASE_URL not set; using in-memory storage");
            let state = AppState::<InMemory>::new(
                Repositories::in_memory(validator),
                uuid_generator(),
                system_clock(),
            );
            handlers::router(state)
        }
    };

    let app = with_middleware(routes);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    tracing::info!("Server stopped");
    Ok(())
}

fn with_middleware(routes: Router) -> Router {
    routes
        .layer(RequestBodyLimitLayer::new(MAX_BODY_BYTES))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
