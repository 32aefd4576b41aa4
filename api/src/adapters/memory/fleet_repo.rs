//! In-memory adapter for FleetRepository

use async_trait::async_trait;
use chrono::Utc;

use super::store::MemoryStore;
use crate::domain::entities::Fleet;
use crate::domain::ports::FleetRepository;
use crate::error::DomainError;

#[derive(Default)]
pub struct InMemoryFleetRepository {
    store: MemoryStore<Fleet>,
}

impl InMemoryFleetRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(test)]
impl InMemoryFleetRepository {
    /// Pre-populate with a fleet for testing
    pub fn with_fleet(self, fleet: Fleet) -> Self {
        self.store.upsert(fleet).unwrap();
        self
    }
}

#[async_trait]
impl FleetRepository for InMemoryFleetRepository {
    async fn save(&self, fleet: &Fleet) -> Result<(), DomainError> {
        self.store.upsert(fleet.clone())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Fleet>, DomainError> {
        self.store.get_live(id)
    }

    async fn find_by_legal_entity(
        &self,
        legal_entity_id: &str,
    ) -> Result<Vec<Fleet>, DomainError> {
        let mut fleets = self
            .store
            .live_where(|f| f.legal_entity_id == legal_entity_id)?;
        fleets.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(fleets)
    }

    async fn soft_delete(&self, id: &str) -> Result<(), DomainError> {
        self.store.soft_delete(id, Utc::now())
    }

    async fn undelete(&self, id: &str) -> Result<(), DomainError> {
        self.store.undelete(id)
    }
}
