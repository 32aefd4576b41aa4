//! Legal entity service
//!
//! Registration and lifecycle of the companies that own fleets.

use std::sync::Arc;

use crate::app::validation::{next_id, require_id, require_text};
use crate::domain::entities::LegalEntity;
use crate::domain::ports::{IdGenerator, LegalEntityRepository};
use crate::error::DomainError;

/// Service for managing legal entities
pub struct LegalEntityService<LR>
where
    LR: LegalEntityRepository,
{
    legal_entities: Arc<LR>,
    ids: IdGenerator,
}

impl<LR> LegalEntityService<LR>
where
    LR: LegalEntityRepository,
{
    pub fn new(legal_entities: Arc<LR>, ids: IdGenerator) -> Self {
        Self {
            legal_entities,
            ids,
        }
    }

    /// Register a new legal entity. Name and tax id are trimmed and required.
    pub async fn create(&self, name: &str, tax_id: &str) -> Result<LegalEntity, DomainError> {
        let name = require_text(name, "name")?;
        let tax_id = require_text(tax_id, "tax_id")?;

        let entity = LegalEntity {
            id: next_id(&self.ids)?,
            name,
            tax_id,
            deleted_at: None,
        };

        if let Err(e) = self.legal_entities.save(&entity).await {
            tracing::error!(id = %entity.id, error = %e, "Failed to save legal entity");
            return Err(e);
        }
        tracing::info!(id = %entity.id, "Created legal entity");

        Ok(entity)
    }

    pub async fn get(&self, id: &str) -> Result<LegalEntity, DomainError> {
        require_id(id, "id")?;
        self.legal_entities
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::NotFound(format!("Legal entity {} not found", id)))
    }

    pub async fn list(&self) -> Result<Vec<LegalEntity>, DomainError> {
        self.legal_entities.find_all().await
    }

    pub async fn delete(&self, id: &str) -> Result<(), DomainError> {
        require_id(id, "id")?;
        self.legal_entities.soft_delete(id).await?;
        tracing::info!(id = %id, "Deleted legal entity");
        Ok(())
    }

    pub async fn undelete(&self, id: &str) -> Result<(), DomainError> {
        require_id(id, "id")?;
        self.legal_entities.undelete(id).await?;
        tracing::info!(id = %id, "Undeleted legal entity");
        Ok(())
    }
}
