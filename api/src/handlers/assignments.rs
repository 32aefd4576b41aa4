//! Vehicle assignment handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};

use crate::domain::entities::VehicleAssignment;
use crate::error::AppError;
use crate::state::{AppState, Backend};

/// Request to check a vehicle out under the contract in the path
#[derive(Debug, Deserialize)]
pub struct CreateAssignmentRequest {
    pub vehicle_id: String,
}

#[derive(Debug, Serialize)]
pub struct AssignmentResponse {
    pub id: String,
    pub driver_id: String,
    pub vehicle_id: String,
    pub contract_id: String,
    pub start_time: String,
    pub end_time: Option<String>,
}

impl From<VehicleAssignment> for AssignmentResponse {
    fn from(assignment: VehicleAssignment) -> Self {
        Self {
            id: assignment.id,
            driver_id: assignment.driver_id,
            vehicle_id: assignment.vehicle_id,
            contract_id: assignment.contract_id,
            start_time: assignment.start_time.to_rfc3339(),
            end_time: assignment.end_time.map(|t| t.to_rfc3339()),
        }
    }
}

/// GET /contracts/:id/assignments
pub async fn list_by_contract<B: Backend>(
    State(state): State<AppState<B>>,
    Path(contract_id): Path<String>,
) -> Result<Json<Vec<AssignmentResponse>>, AppError> {
    let assignments = state
        .assignment_service
        .list_by_contract(&contract_id)
        .await?;
    Ok(Json(assignments.into_iter().map(Into::into).collect()))
}

/// POST /contracts/:id/assignments
pub async fn create<B: Backend>(
    State(state): State<AppState<B>>,
    Path(contract_id): Path<String>,
    Json(request): Json<CreateAssignmentRequest>,
) -> Result<(StatusCode, Json<AssignmentResponse>), AppError> {
    let assignment = state
        .assignment_service
        .assign(&contract_id, &request.vehicle_id)
        .await?;
    Ok((StatusCode::CREATED, Json(assignment.into())))
}

/// GET /assignments/:id
pub async fn get<B: Backend>(
    State(state): State<AppState<B>>,
    Path(id): Path<String>,
) -> Result<Json<AssignmentResponse>, AppError> {
    let assignment = state.assignment_service.get(&id).await?;
    Ok(Json(assignment.into()))
}

/// POST /assignments/:id/return
pub async fn return_vehicle<B: Backend>(
    State(state): State<AppState<B>>,
    Path(id): Path<String>,
) -> Result<Json<AssignmentResponse>, AppError> {
    let assignment = state.assignment_service.return_vehicle(&id).await?;
    Ok(Json(assignment.into()))
}

/// DELETE /assignments/:id
pub async fn delete<B: Backend>(
    State(state): State<AppState<B>>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    state.assignment_service.delete(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// POST /assignments/:id/undelete
pub async fn undelete<B: Backend>(
    State(state): State<AppState<B>>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    state.assignment_service.undelete(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}
