//! HTTP handlers
//!
//! Axum request handlers for the API endpoints. Every handler is generic
//! over the `Backend` so one router serves all storage adapters.

pub mod assignments;
pub mod contracts;
pub mod drivers;
pub mod fleets;
pub mod legal_entities;
pub mod vehicles;


use axum::{
    http::Uri,
    routing::{get, post},
    Json, Router,
};
use chrono::NaiveDate;
use serde::Serialize;

use crate::error::AppError;
use crate::state::{AppState, Backend};

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("No route for {}", uri.path()))
}

/// Parse a `YYYY-MM-DD` request field
pub(crate) fn parse_date(value: &str, field: &str) -> Result<NaiveDate, AppError> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").map_err(|_| {
        AppError::BadRequest(format!("{} must be a date in YYYY-MM-DD format", field))
    })
}

/// All API routes, without middleware
pub fn router<B: Backend>(state: AppState<B>) -> Router {
    Router::new()
        .route("/health", get(health))
        // Legal entities
        .route(
            "/legal-entities",
            get(legal_entities::list::<B>).post(legal_entities::create::<B>),
        )
        .route(
            "/legal-entities/:id",
            get(legal_entities::get::<B>).delete(legal_entities::delete::<B>),
        )
        .route(
            "/legal-entities/:id/undelete",
            post(legal_entities::undelete::<B>),
        )
        .route(
            "/legal-entities/:id/fleets",
            get(fleets::list_by_legal_entity::<B>).post(fleets::create::<B>),
        )
        // Fleets
        .route(
            "/fleets/:id",
            get(fleets::get::<B>).delete(fleets::delete::<B>),
        )
        .route("/fleets/:id/undelete", post(fleets::undelete::<B>))
        .route(
            "/fleets/:id/vehicles",
            get(vehicles::list_by_fleet::<B>).post(vehicles::create::<B>),
        )
        // Vehicles
        .route(
            "/vehicles/:id",
            get(vehicles::get::<B>).delete(vehicles::delete::<B>),
        )
        .route("/vehicles/:id/undelete", post(vehicles::undelete::<B>))
        // Drivers
        .route(
            "/drivers",
            get(drivers::list::<B>).post(drivers::create::<B>),
        )
        .route(
            "/drivers/:id",
            get(drivers::get::<B>).delete(drivers::delete::<B>),
        )
        .route("/drivers/:id/undelete", post(drivers::undelete::<B>))
        .route("/drivers/:id/validate", post(drivers::validate_license::<B>))
        .route(
            "/drivers/:id/contracts",
            get(contracts::list_by_driver::<B>).post(contracts::create::<B>),
        )
        // Contracts
        .route(
            "/contracts/:id",
            get(contracts::get::<B>).delete(contracts::delete::<B>),
        )
        .route("/contracts/:id/undelete", post(contracts::undelete::<B>))
        .route("/contracts/:id/terminate", post(contracts::terminate::<B>))
        .route(
            "/contracts/:id/assignments",
            get(assignments::list_by_contract::<B>).post(assignments::create::<B>),
        )
        // Vehicle assignments
        .route(
            "/assignments/:id",
            get(assignments::get::<B>).delete(assignments::delete::<B>),
        )
        .route(
            "/assignments/:id/undelete",
            post(assignments::undelete::<B>),
        )
        .route(
            "/assignments/:id/return",
            post(assignments::return_vehicle::<B>),
        )
        .fallback(not_found)
        .with_state(state)
}
