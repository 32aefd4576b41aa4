//! In-memory adapter for LegalEntityRepository

use async_trait::async_trait;
use chrono::Utc;

use super::store::MemoryStore;
use crate::domain::entities::LegalEntity;
use crate::domain::ports::LegalEntityRepository;
use crate::error::DomainError;

#[derive(Default)]
pub struct InMemoryLegalEntityRepository {
    store: MemoryStore<LegalEntity>,
}

impl InMemoryLegalEntityRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(test)]
impl InMemoryLegalEntityRepository {
    /// Pre-populate with a legal entity for testing
    pub fn with_legal_entity(self, entity: LegalEntity) -> Self {
        self.store.upsert(entity).unwrap();
        self
    }
}

#[async_trait]
impl LegalEntityRepository for InMemoryLegalEntityRepository {
    async fn save(&self, entity: &LegalEntity) -> Result<(), DomainError> {
        self.store.upsert(entity.clone())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<LegalEntity>, DomainError> {
        self.store.get_live(id)
    }

    async fn find_all(&self) -> Result<Vec<LegalEntity>, DomainError> {
        let mut entities = self.store.live_where(|_| true)?;
        entities.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(entities)
    }

    async fn soft_delete(&self, id: &str) -> Result<(), DomainError> {
        self.store.soft_delete(id, Utc::now())
    }

    async fn undelete(&self, id: &str) -> Result<(), DomainError> {
        self.store.undelete(id)
    }
}
