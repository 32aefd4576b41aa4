//! Unified error types for the FleetLease API
//!
//! This module defines error types for each layer:
//! - `DomainError`: Core business logic errors, one variant per failure kind
//! - `AppError`: Application layer errors (wraps domain errors for HTTP responses)

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::domain::entities::LicenseVerdict;

/// Domain layer errors - pure business logic errors
///
/// Callers distinguish failures by variant. Messages carry context only.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Entity not found: {0}")]
    NotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Entity is already deleted: {0}")]
    AlreadyDeleted(String),

    #[error("Contract is not active")]
    ContractNotActive,

    #[error("Driver already has an active vehicle assignment for this fleet")]
    DriverAlreadyAssignedInFleet,

    #[error("Driver has active contracts; terminate them before deletion")]
    DriverHasActiveContracts,

    #[error("Driver has active vehicle assignments; return vehicles before deletion")]
    DriverHasActiveAssignments,

    #[error("Driver license validation service not available: {0}")]
    ValidationServiceUnavailable(String),

    #[error("Driver license validation failed: {0}")]
    LicenseValidationFailed(LicenseVerdict),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl DomainError {
    /// Whether the message may be returned to API clients verbatim
    pub fn is_exposable(&self) -> bool {
        !matches!(self, DomainError::Database(_) | DomainError::Internal(_))
    }
}

/// Application layer errors - used by HTTP handlers
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Domain(#[from] DomainError),

    #[error("Invalid request: {0}")]
    BadRequest(String),

    #[error("Not found: {0}")]
    NotFound(String),
}

/// Error response body for JSON responses
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error, details) = match &self {
            AppError::Domain(e) => {
                let (status, error) = match e {
                    DomainError::InvalidInput(_) => (StatusCode::BAD_REQUEST, "Invalid input"),
                    DomainError::NotFound(_) => (StatusCode::NOT_FOUND, "Not found"),
                    DomainError::Conflict(_)
                    | DomainError::AlreadyDeleted(_)
                    | DomainError::DriverAlreadyAssignedInFleet
                    | DomainError::DriverHasActiveContracts
                    | DomainError::DriverHasActiveAssignments => {
                        (StatusCode::CONFLICT, "Conflict")
                    }
                    DomainError::ContractNotActive => {
                        (StatusCode::UNPROCESSABLE_ENTITY, "Contract not active")
                    }
                    DomainError::LicenseValidationFailed(_) => (
                        StatusCode::UNPROCESSABLE_ENTITY,
                        "License validation failed",
                    ),
                    DomainError::ValidationServiceUnavailable(_) => (
                        StatusCode::SERVICE_UNAVAILABLE,
                        "Validation service unavailable",
                    ),
                    DomainError::Database(msg) => {
                        tracing::error!("Database error: {}", msg);
                        (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
                    }
                    DomainError::Internal(msg) => {
                        tracing::error!("Internal error: {}", msg);
                        (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
                    }
                };
                let details = e.is_exposable().then(|| e.to_string());
                (status, error, details)
            }
            AppError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, "Bad request", Some(msg.clone()))
            }
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "Not found", Some(msg.clone())),
        };

        let body = Json(ErrorResponse {
            error: error.to_string(),
            details,
        });

        (status, body).into_response()
    }
}
