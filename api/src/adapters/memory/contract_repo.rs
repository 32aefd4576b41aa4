//! In-memory adapter for ContractRepository

use async_trait::async_trait;
use chrono::Utc;

use super::store::MemoryStore;
use crate::domain::entities::Contract;
use crate::domain::ports::ContractRepository;
use crate::error::DomainError;

#[derive(Default)]
pub struct InMemoryContractRepository {
    store: MemoryStore<Contract>,
}

impl InMemoryContractRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(test)]
impl InMemoryContractRepository {
    /// Pre-populate with a contract for testing
    pub fn with_contract(self, contract: Contract) -> Self {
        self.store.upsert(contract).unwrap();
        self
    }
}

#[async_trait]
impl ContractRepository for InMemoryContractRepository {
    async fn save(&self, contract: &Contract) -> Result<(), DomainError> {
        self.store.upsert(contract.clone())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Contract>, DomainError> {
        self.store.get_live(id)
    }

    async fn find_by_driver(&self, driver_id: &str) -> Result<Vec<Contract>, DomainError> {
        let mut contracts = self.store.live_where(|c| c.driver_id == driver_id)?;
        contracts.sort_by(|a, b| {
            a.start_date
                .cmp(&b.start_date)
                .then_with(|| a.id.cmp(&b.id))
        });
        Ok(contracts)
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
    use crate::test_utils::{date, test_contract};

    #[tokio::test]
    async fn find_by_driver_sorted_by_start_date() {
        let repo = InMemoryContractRepository::new()
            .with_contract(test_contract("c-1", "d-1", date(2025, 3, 1), date(2025, 3, 31)))
            .with_contract(test_contract("c-2", "d-1", date(2025, 1, 1), date(2025, 1, 31)))
            .with_contract(test_contract("c-3", "d-2", date(2025, 2, 1), date(2025, 2, 28)));

        let ids: Vec<_> = repo
            .find_by_driver("d-1")
            .await
            .unwrap()
            .into_iter()
            .map(|c| c.id)
            .collect();

        assert_eq!(ids, vec!["c-2", "c-1"]);
    }

    #[tokio::test]
    async fn find_by_driver_skips_soft_deleted() {
        let repo = InMemoryContractRepository::new()
            .with_contract(test_contract("c-1", "d-1", date(2025, 1, 1), date(2025, 1, 31)));

        repo.soft_delete("c-1").await.unwrap();

        assert!(repo.find_by_driver("d-1").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn terminated_contract_round_trips() {
        let mut contract = test_contract("c-1", "d-1", date(2025, 1, 1), date(2025, 1, 31));
        contract.terminated_at = Some(Utc::now());
        contract.terminated_by = Some("fleet-manager".to_string());
        let repo = InMemoryContractRepository::new();

        repo.save(&contract).await.unwrap();

        assert_eq!(repo.find_by_id("c-1").await.unwrap(), Some(contract));
    }
}
