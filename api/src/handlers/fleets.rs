//! Fleet handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};

use crate::domain::entities::Fleet;
use crate::error::AppError;
use crate::state::{AppState, Backend};

/// Request to create a fleet under the legal entity in the path
#[derive(Debug, Deserialize)]
pub struct CreateFleetRequest {
    pub name: String,
}

#[derive(Debug, Serialize)]
pub struct FleetResponse {
    pub id: String,
    pub legal_entity_id: String,
    pub name: String,
}

impl From<Fleet> for FleetResponse {
    fn from(fleet: Fleet) -> Self {
        Self {
            id: fleet.id,
            legal_entity_id: fleet.legal_entity_id,
            name: fleet.name,
        }
    }
}

/// GET /legal-entities/:id/fleets
pub async fn list_by_legal_entity<B: Backend>(
    State(state): State<AppState<B>>,
    Path(legal_entity_id): Path<String>,
) -> Result<Json<Vec<FleetResponse>>, AppError> {
    let fleets = state
        .fleet_service
        .list_by_legal_entity(&legal_entity_id)
        .await?;
    Ok(Json(fleets.into_iter().map(Into::into).collect()))
}

/// POST /legal-entities/:id/fleets
pub async fn create<B: Backend>(
    State(state): State<AppState<B>>,
    Path(legal_entity_id): Path<String>,
    Json(request): Json<CreateFleetRequest>,
) -> Result<(StatusCode, Json<FleetResponse>), AppError> {
    let fleet = state
        .fleet_service
        .create(&legal_entity_id, &request.name)
        .await?;
    Ok((StatusCode::CREATED, Json(fleet.into())))
}

/// GET /fleets/:id
pub async fn get<B: Backend>(
    State(state): State<AppState<B>>,
    Path(id): Path<String>,
) -> Result<Json<FleetResponse>, AppError> {
    let fleet = state.fleet_service.get(&id).await?;
    Ok(Json(fleet.into()))
}

/// DELETE /fleets/:id
pub async fn delete<B: Backend>(
    State(state): State<AppState<B>>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    state.fleet_service.delete(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// POST /fleets/:id/undelete
pub async fn undelete<B: Backend>(
    State(state): State<AppState<B>>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    state.fleet_service.undelete(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}
