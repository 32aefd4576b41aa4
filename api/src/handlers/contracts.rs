//! Contract handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};

use super::parse_date;
use crate::domain::entities::Contract;
use crate::error::AppError;
use crate::state::{AppState, Backend};

/// Request to sign a contract for the driver in the path
#[derive(Debug, Deserialize)]
pub struct CreateContractRequest {
    pub legal_entity_id: String,
    pub fleet_id: String,
    /// First day, `YYYY-MM-DD`
    pub start_date: String,
    /// Last day (inclusive), `YYYY-MM-DD`
    pub end_date: String,
}

#[derive(Debug, Deserialize)]
pub struct TerminateContractRequest {
    pub terminated_by: String,
}

#[derive(Debug, Serialize)]
pub struct ContractResponse {
    pub id: String,
    pub driver_id: String,
    pub legal_entity_id: String,
    pub fleet_id: String,
    pub start_date: String,
    pub end_date: String,
    pub terminated_at: Option<String>,
    pub terminated_by: Option<String>,
}

impl From<Contract> for ContractResponse {
    fn from(contract: Contract) -> Self {
        Self {
            id: contract.id,
            driver_id: contract.driver_id,
            legal_entity_id: contract.legal_entity_id,
            fleet_id: contract.fleet_id,
            start_date: contract.start_date.to_string(),
            end_date: contract.end_date.to_string(),
            terminated_at: contract.terminated_at.map(|t| t.to_rfc3339()),
            terminated_by: contract.terminated_by,
        }
    }
}

/// GET /drivers/:id/contracts
pub async fn list_by_driver<B: Backend>(
    State(state): State<AppState<B>>,
    Path(driver_id): Path<String>,
) -> Result<Json<Vec<ContractResponse>>, AppError> {
    let contracts = state.contract_service.list_by_driver(&driver_id).await?;
    Ok(Json(contracts.into_iter().map(Into::into).collect()))
}

/// POST /drivers/:id/contracts
pub async fn create<B: Backend>(
    State(state): State<AppState<B>>,
    Path(driver_id): Path<String>,
    Json(request): Json<CreateContractRequest>,
) -> Result<(StatusCode, Json<ContractResponse>), AppError> {
    let start_date = parse_date(&request.start_date, "start_date")?;
    let end_date = parse_date(&request.end_date, "end_date")?;

    let contract = state
        .contract_service
        .create(
            &driver_id,
            &request.legal_entity_id,
            &request.fleet_id,
            start_date,
            end_date,
        )
        .await?;
    Ok((StatusCode::CREATED, Json(contract.into())))
}

/// GET /contracts/:id
pub async fn get<B: Backend>(
    State(state): State<AppState<B>>,
    Path(id): Path<String>,
) -> Result<Json<ContractResponse>, AppError> {
    let contract = state.contract_service.get(&id).await?;
    Ok(Json(contract.into()))
}

/// POST /contracts/:id/terminate
pub async fn terminate<B: Backend>(
    State(state): State<AppState<B>>,
    Path(id): Path<String>,
    Json(request): Json<TerminateContractRequest>,
) -> Result<Json<ContractResponse>, AppError> {
    let contract = state
        .contract_service
        .terminate(&id, &request.terminated_by)
        .await?;
    Ok(Json(contract.into()))
}

/// DELETE /contracts/:id
pub async fn delete<B: Backend>(
    State(state): State<AppState<B>>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    state.contract_service.delete(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// POST /contracts/:id/undelete
pub async fn undelete<B: Backend>(
    State(state): State<AppState<B>>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    state.contract_service.undelete(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}
