//! In-memory adapter for DriverRepository

use async_trait::async_trait;
use chrono::Utc;

use super::store::MemoryStore;
use crate::domain::entities::Driver;
use crate::domain::ports::DriverRepository;
use crate::error::DomainError;

#[derive(Default)]
pub struct InMemoryDriverRepository {
    store: MemoryStore<Driver>,
}

impl InMemoryDriverRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(test)]
impl InMemoryDriverRepository {
    /// Pre-populate with a driver for testing
    pub fn with_driver(self, driver: Driver) -> Self {
        self.store.upsert(driver).unwrap();
        self
    }
}

#[async_trait]
impl DriverRepository for InMemoryDriverRepository {
    async fn save(&self, driver: &Driver) -> Result<(), DomainError> {
        self.store.upsert(driver.clone())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Driver>, DomainError> {
        self.store.get_live(id)
    }

    async fn find_all(&self) -> Result<Vec<Driver>, DomainError> {
        let mut drivers = self.store.live_where(|_| true)?;
        drivers.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(drivers)
    }

    async fn soft_delete(&self, id: &str) -> Result<(), DomainError> {
        self.store.soft_delete(id, Utc::now())
    }

    async fn undelete(&self, id: &str) -> Result<(), DomainError> {
        self.store.undelete(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::test_driver;

    #[tokio::test]
    async fn soft_delete_hides_driver_from_listing() {
        let repo = InMemoryDriverRepository::new()
            .with_driver(test_driver("d-1"))
            .with_driver(test_driver("d-2"));

        repo.soft_delete("d-1").await.unwrap();

        let drivers = repo.find_all().await.unwrap();
        assert_eq!(drivers.len(), 1);
        assert_eq!(drivers[0].id, "d-2");
        assert!(repo.find_by_id("d-1").await.unwrap().is_none());
    }
}
