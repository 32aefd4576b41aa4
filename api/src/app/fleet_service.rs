//! Fleet service

use std::sync::Arc;

use crate::app::validation::{next_id, require_id, require_text};
use crate::domain::entities::Fleet;
use crate::domain::ports::{FleetRepository, IdGenerator, LegalEntityRepository};
use crate::error::DomainError;

/// Service for managing fleets owned by legal entities
pub struct FleetService<LR, FR>
where
    LR: LegalEntityRepository,
    FR: FleetRepository,
{
    legal_entities: Arc<LR>,
    fleets: Arc<FR>,
    ids: IdGenerator,
}

impl<LR, FR> FleetService<LR, FR>
where
    LR: LegalEntityRepository,
    FR: FleetRepository,
{
    pub fn new(legal_entities: Arc<LR>, fleets: Arc<FR>, ids: IdGenerator) -> Self {
        Self {
            legal_entities,
            fleets,
            ids,
        }
    }

    /// Create a fleet under an existing legal entity
    pub async fn create(&self, legal_entity_id: &str, name: &str) -> Result<Fleet, DomainError> {
        require_id(legal_entity_id, "legal_entity_id")?;
        let name = require_text(name, "name")?;

        if self.legal_entities.find_by_id(legal_entity_id).await?.is_none() {
            return Err(DomainError::NotFound(format!(
                "Legal entity {} not found",
                legal_entity_id
            )));
        }

        let fleet = Fleet {
            id: next_id(&self.ids)?,
            legal_entity_id: legal_entity_id.to_string(),
            name,
            deleted_at: None,
        };

        if let Err(e) = self.fleets.save(&fleet).await {
            tracing::error!(id = %fleet.id, error = %e, "Failed to save fleet");
            return Err(e);
        }
        tracing::info!(id = %fleet.id, legal_entity_id = %legal_entity_id, "Created fleet");

        Ok(fleet)
    }

    pub async fn get(&self, id: &str) -> Result<Fleet, DomainError> {
        require_id(id, "id")?;
        self.fleets
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::NotFound(format!("Fleet {} not found", id)))
    }

    pub async fn list_by_legal_entity(
        &self,
        legal_entity_id: &str,
    ) -> Result<Vec<Fleet>, DomainError> {
        require_id(legal_entity_id, "legal_entity_id")?;
        self.fleets.find_by_legal_entity(legal_entity_id).await
    }

    pub async fn delete(&self, id: &str) -> Result<(), DomainError> {
        require_id(id, "id")?;
        self.fleets.soft_delete(id).await?;
        tracing::info!(id = %id, "Deleted fleet");
        Ok(())
    }

    pub async fn undelete(&self, id: &str) -> Result<(), DomainError> {
        require_id(id, "id")?;
        self.fleets.undelete(id).await?;
        tracing::info!(id = %id, "Undeleted fleet");
        Ok(())
    }
}
