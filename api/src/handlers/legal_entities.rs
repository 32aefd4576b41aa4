//! Legal entity handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};

use crate::domain::entities::LegalEntity;
use crate::error::AppError;
use crate::state::{AppState, Backend};

/// Request to register a legal entity
#[derive(Debug, Deserialize)]
pub struct CreateLegalEntityRequest {
    pub name: String,
    pub tax_id: String,
}

#[derive(Debug, Serialize)]
pub struct LegalEntityResponse {
    pub id: String,
    pub name: String,
    pub tax_id: String,
}

impl From<LegalEntity> for LegalEntityResponse {
    fn from(entity: LegalEntity) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            tax_id: entity.tax_id,
        }
    }
}

/// GET /legal-entities
pub async fn list<B: Backend>(
    State(state): State<AppState<B>>,
) -> Result<Json<Vec<LegalEntityResponse>>, AppError> {
    let entities = state.legal_entity_service.list().await?;
    Ok(Json(entities.into_iter().map(Into::into).collect()))
}

/// POST /legal-entities
pub async fn create<B: Backend>(
    State(state): State<AppState<B>>,
    Json(request): Json<CreateLegalEntityRequest>,
) -> Result<(StatusCode, Json<LegalEntityResponse>), AppError> {
    let entity = state
        .legal_entity_service
        .create(&request.name, &request.tax_id)
        .await?;
    Ok((StatusCode::CREATED, Json(entity.into())))
}

/// GET /legal-entities/:id
pub async fn get<B: Backend>(
    State(state): State<AppState<B>>,
    Path(id): Path<String>,
) -> Result<Json<LegalEntityResponse>, AppError> {
    let entity = state.legal_entity_service.get(&id).await?;
    Ok(Json(entity.into()))
}

/// DELETE /legal-entities/:id
pub async fn delete<B: Backend>(
    State(state): State<AppState<B>>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    state.legal_entity_service.delete(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// POST /legal-entities/:id/undelete
pub async fn undelete<B: Backend>(
    State(state): State<AppState<B>>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    state.legal_entity_service.undelete(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}
