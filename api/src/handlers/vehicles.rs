//! Vehicle handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};

use crate::app::NewVehicle;
use crate::domain::entities::Vehicle;
use crate::error::AppError;
use crate::state::{AppState, Backend};

/// Request to add a vehicle to the fleet in the path
#[derive(Debug, Deserialize)]
pub struct CreateVehicleRequest {
    pub make: String,
    pub model: String,
    pub year: i32,
    /// May be empty for vehicles that are not registered yet
    #[serde(default)]
    pub license_plate: String,
}

#[derive(Debug, Serialize)]
pub struct VehicleResponse {
    pub id: String,
    pub fleet_id: String,
    pub make: String,
    pub model: String,
    pub year: i32,
    pub license_plate: String,
}

impl From<Vehicle> for VehicleResponse {
    fn from(vehicle: Vehicle) -> Self {
        Self {
            id: vehicle.id,
            fleet_id: vehicle.fleet_id,
            make: vehicle.make,
            model: vehicle.model,
            year: vehicle.year,
            license_plate: vehicle.license_plate,
        }
    }
}

/// GET /fleets/:id/vehicles
pub async fn list_by_fleet<B: Backend>(
    State(state): State<AppState<B>>,
    Path(fleet_id): Path<String>,
) -> Result<Json<Vec<VehicleResponse>>, AppError> {
    let vehicles = state.vehicle_service.list_by_fleet(&fleet_id).await?;
    Ok(Json(vehicles.into_iter().map(Into::into).collect()))
}

/// POST /fleets/:id/vehicles
pub async fn create<B: Backend>(
    State(state): State<AppState<B>>,
    Path(fleet_id): Path<String>,
    Json(request): Json<CreateVehicleRequest>,
) -> Result<(StatusCode, Json<VehicleResponse>), AppError> {
    let vehicle = state
        .vehicle_service
        .create(NewVehicle {
            fleet_id,
            make: request.make,
            model: request.model,
            year: request.year,
            license_plate: request.license_plate,
        })
        .await?;
    Ok((StatusCode::CREATED, Json(vehicle.into())))
}

/// GET /vehicles/:id
pub async fn get<B: Backend>(
    State(state): State<AppState<B>>,
    Path(id): Path<String>,
) -> Result<Json<VehicleResponse>, AppError> {
    let vehicle = state.vehicle_service.get(&id).await?;
    Ok(Json(vehicle.into()))
}

/// DELETE /vehicles/:id
pub async fn delete<B: Backend>(
    State(state): State<AppState<B>>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    state.vehicle_service.delete(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// POST /vehicles/:id/undelete
pub async fn undelete<B: Backend>(
    State(state): State<AppState<B>>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    state.vehicle_service.undelete(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}
