//! Driver handlers
//!
//! Registration goes through the license register; see `DriverService`.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};

use crate::domain::entities::{Driver, LicenseVerdict};
use crate::error::AppError;
use crate::state::{AppState, Backend};

/// Request to register a driver
#[derive(Debug, Deserialize)]
pub struct CreateDriverRequest {
    pub first_name: String,
    pub last_name: String,
    pub license_number: String,
}

#[derive(Debug, Serialize)]
pub struct DriverResponse {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub license_number: String,
}

impl From<Driver> for DriverResponse {
    fn from(driver: Driver) -> Self {
        Self {
            id: driver.id,
            first_name: driver.first_name,
            last_name: driver.last_name,
            license_number: driver.license_number,
        }
    }
}

/// Outcome of re-checking a stored driver's license
#[derive(Debug, Serialize)]
pub struct LicenseCheckResponse {
    pub driver_id: String,
    pub verdict: LicenseVerdict,
    pub valid: bool,
}

/// GET /drivers
pub async fn list<B: Backend>(
    State(state): State<AppState<B>>,
) -> Result<Json<Vec<DriverResponse>>, AppError> {
    let drivers = state.driver_service.list().await?;
    Ok(Json(drivers.into_iter().map(Into::into).collect()))
}

/// POST /drivers
///
/// 422 when the register rejects the license, 503 when it cannot be reached.
pub async fn create<B: Backend>(
    State(state): State<AppState<B>>,
    Json(request): Json<CreateDriverRequest>,
) -> Result<(StatusCode, Json<DriverResponse>), AppError> {
    let driver = state
        .driver_service
        .create(
            &request.first_name,
            &request.last_name,
            &request.license_number,
        )
        .await?;
    Ok((StatusCode::CREATED, Json(driver.into())))
}

/// GET /drivers/:id
pub async fn get<B: Backend>(
    State(state): State<AppState<B>>,
    Path(id): Path<String>,
) -> Result<Json<DriverResponse>, AppError> {
    let driver = state.driver_service.get(&id).await?;
    Ok(Json(driver.into()))
}

/// DELETE /drivers/:id
pub async fn delete<B: Backend>(
    State(state): State<AppState<B>>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    state.driver_service.delete(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// POST /drivers/:id/undelete
pub async fn undelete<B: Backend>(
    State(state): State<AppState<B>>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    state.driver_service.undelete(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// POST /drivers/:id/validate
///
/// Returns the raw verdict; a rejected license is not an error here.
pub async fn validate_license<B: Backend>(
    State(state): State<AppState<B>>,
    Path(id): Path<String>,
) -> Result<Json<LicenseCheckResponse>, AppError> {
    let verdict = state.driver_service.validate_license(&id).await?;
    Ok(Json(LicenseCheckResponse {
        driver_id: id,
        verdict,
        valid: verdict.is_valid(),
    }))
}
