//! Contract service
//!
//! Creates contracts between drivers and (legal entity, fleet) pairs and
//! enforces that contracts for the same triple never overlap.
//!
//! The overlap check reads existing contracts and then saves without a
//! lock: two concurrent creates can both pass. Exclusion under concurrency
//! must come from the store.

use std::sync::Arc;

use chrono::NaiveDate;

use crate::app::validation::{next_id, require_id, require_text};
use crate::domain::entities::Contract;
use crate::domain::ports::{
    Clock, ContractRepository, DriverRepository, FleetRepository, IdGenerator,
    LegalEntityRepository,
};
use crate::error::DomainError;

/// Service for managing driver contracts
pub struct ContractService<DR, LR, FR, CR>
where
    DR: DriverRepository,
    LR: LegalEntityRepository,
    FR: FleetRepository,
    CR: ContractRepository,
{
    drivers: Arc<DR>,
    legal_entities: Arc<LR>,
    fleets: Arc<FR>,
    contracts: Arc<CR>,
    ids: IdGenerator,
    clock: Clock,
}

impl<DR, LR, FR, CR> ContractService<DR, LR, FR, CR>
where
    DR: DriverRepository,
    LR: LegalEntityRepository,
    FR: FleetRepository,
    CR: ContractRepository,
{
    pub fn new(
        drivers: Arc<DR>,
        legal_entities: Arc<LR>,
        fleets: Arc<FR>,
        contracts: Arc<CR>,
        ids: IdGenerator,
        clock: Clock,
    ) -> Self {
        Self {
            drivers,
            legal_entities,
            fleets,
            contracts,
            ids,
            clock,
        }
    }

    /// Sign a new contract
    ///
    /// Fails with:
    /// - `InvalidInput` for empty ids or `end_date <= start_date`
    /// - `NotFound` when the driver, legal entity or fleet is missing
    /// - `Conflict` when a live contract for the same triple overlaps
    pub async fn create(
        &self,
        driver_id: &str,
        legal_entity_id: &str,
        fleet_id: &str,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<Contract, DomainError> {
        if driver_id.is_empty() || legal_entity_id.is_empty() || fleet_id.is_empty() {
            return Err(DomainError::InvalidInput(
                "driver_id, legal_entity_id, and fleet_id are required".to_string(),
            ));
        }
        if end_date <= start_date {
            return Err(DomainError::InvalidInput(
                "end_date must be after start_date".to_string(),
            ));
        }

        if self.drivers.find_by_id(driver_id).await?.is_none() {
            return Err(DomainError::NotFound(format!(
                "Driver {} not found",
                driver_id
            )));
        }
        if self.legal_entities.find_by_id(legal_entity_id).await?.is_none() {
            return Err(DomainError::NotFound(format!(
                "Legal entity {} not found",
                legal_entity_id
            )));
        }
        if self.fleets.find_by_id(fleet_id).await?.is_none() {
            return Err(DomainError::NotFound(format!(
                "Fleet {} not found",
                fleet_id
            )));
        }

        let existing = self.contracts.find_by_driver(driver_id).await?;
        if let Some(clash) = existing
            .iter()
            .filter(|c| c.covers(driver_id, legal_entity_id, fleet_id))
            .find(|c| c.overlaps(start_date, end_date))
        {
            tracing::debug!(
                driver_id = %driver_id,
                existing_id = %clash.id,
                "Rejected overlapping contract"
            );
            return Err(DomainError::Conflict(format!(
                "contract dates overlap with existing contract {}",
                clash.id
            )));
        }

        let contract = Contract {
            id: next_id(&self.ids)?,
            driver_id: driver_id.to_string(),
            legal_entity_id: legal_entity_id.to_string(),
            fleet_id: fleet_id.to_string(),
            start_date,
            end_date,
            terminated_at: None,
            terminated_by: None,
            deleted_at: None,
        };

        if let Err(e) = self.contracts.save(&contract).await {
            tracing::error!(id = %contract.id, error = %e, "Failed to save contract");
            return Err(e);
        }
        tracing::info!(id = %contract.id, driver_id = %driver_id, "Created contract");

        Ok(contract)
    }

    pub async fn get(&self, id: &str) -> Result<Contract, DomainError> {
        require_id(id, "id")?;
        self.contracts
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::NotFound(format!("Contract {} not found", id)))
    }

    /// Live contracts of a driver, oldest start date first
    pub async fn list_by_driver(&self, driver_id: &str) -> Result<Vec<Contract>, DomainError> {
        require_id(driver_id, "driver_id")?;
        self.contracts.find_by_driver(driver_id).await
    }

    /// End a contract early, stamping the current time and who ended it
    pub async fn terminate(&self, id: &str, terminated_by: &str) -> Result<Contract, DomainError> {
        require_id(id, "id")?;
        let terminated_by = require_text(terminated_by, "terminated_by")?;

        let mut contract = self.get(id).await?;
        if contract.is_terminated() {
            return Err(DomainError::Conflict(
                "contract is already terminated".to_string(),
            ));
        }

        contract.terminated_at = Some((self.clock)());
        contract.terminated_by = Some(terminated_by);

        if let Err(e) = self.contracts.save(&contract).await {
            tracing::error!(id = %id, error = %e, "Failed to save terminated contract");
            return Err(e);
        }
        tracing::info!(id = %id, "Terminated contract");

        Ok(contract)
    }

    pub async fn delete(&self, id: &str) -> Result<(), DomainError> {
        require_id(id, "id")?;
        self.contracts.soft_delete(id).await?;
        tracing::info!(id = %id, "Deleted contract");
        Ok(())
    }

    pub async fn undelete(&self, id: &str) -> Result<(), DomainError> {
        require_id(id, "id")?;
        self.contracts.undelete(id).await?;
        tracing::info!(id = %id, "Undeleted contract");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::{
        InMemoryContractRepository, InMemoryDriverRepository, InMemoryFleetRepository,
        InMemoryLegalEntityRepository,
    };
    use crate::test_utils::{
        at, date, fixed_clock, sequential_ids, test_contract, test_driver, test_fleet,
        test_legal_entity,
    };

    type TestContractService = ContractService<
        InMemoryDriverRepository,
        InMemoryLegalEntityRepository,
        InMemoryFleetRepository,
        InMemoryContractRepository,
    >;

    fn create_service(contracts: InMemoryContractRepository) -> TestContractService {
        ContractService::new(
            Arc::new(InMemoryDriverRepository::new().with_driver(test_driver("d-1"))),
            Arc::new(
                InMemoryLegalEntityRepository::new()
                    .with_legal_entity(test_legal_entity("le-1"))
                    .with_legal_entity(test_legal_entity("le-2")),
            ),
            Arc::new(
                InMemoryFleetRepository::new()
                    .with_fleet(test_fleet("f-1", "le-1"))
                    .with_fleet(test_fleet("f-2", "le-1")),
            ),
            Arc::new(contracts),
            sequential_ids("c"),
            fixed_clock(at(2025, 1, 10, 12, 0, 0)),
        )
    }

    fn january_contract() -> Contract {
        test_contract("existing", "d-1", date(2025, 1, 1), date(2025, 1, 31))
    }

    // =========================================================================
    // create tests
    // =========================================================================

    #[tokio::test]
    async fn create_contract_success() {
        let service = create_service(InMemoryContractRepository::new());

        let contract = service
            .create("d-1", "le-1", "f-1", date(2025, 1, 1), date(2025, 6, 30))
            .await
            .unwrap();

        assert_eq!(contract.id, "c-1");
        assert!(contract.terminated_at.is_none());
        assert!(contract.terminated_by.is_none());
        assert_eq!(service.get("c-1").await.unwrap(), contract);
    }

    #[tokio::test]
    async fn create_rejects_overlap() {
        let service =
            create_service(InMemoryContractRepository::new().with_contract(january_contract()));

        let err = service
            .create("d-1", "le-1", "f-1", date(2025, 1, 15), date(2025, 2, 15))
            .await
            .unwrap_err();

        assert!(matches!(err, DomainError::Conflict(_)));
    }

    #[tokio::test]
    async fn create_allows_adjacent_range() {
        let service =
            create_service(InMemoryContractRepository::new().with_contract(january_contract()));

        let result = service
            .create("d-1", "le-1", "f-1", date(2025, 2, 1), date(2025, 2, 28))
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn overlap_only_applies_to_same_triple() {
        let service =
            create_service(InMemoryContractRepository::new().with_contract(january_contract()));

        let other_fleet = service
            .create("d-1", "le-1", "f-2", date(2025, 1, 15), date(2025, 2, 15))
            .await;
        let other_legal_entity = service
            .create("d-1", "le-2", "f-1", date(2025, 1, 15), date(2025, 2, 15))
            .await;

        assert!(other_fleet.is_ok());
        assert!(other_legal_entity.is_ok());
    }

    #[tokio::test]
    async fn terminated_contract_frees_remaining_dates() {
        let mut existing = january_contract();
        existing.terminated_at = Some(at(2025, 1, 10, 9, 0, 0));
        existing.terminated_by = Some("ops".to_string());
        let service = create_service(InMemoryContractRepository::new().with_contract(existing));

        let after_termination = service
            .create("d-1", "le-1", "f-1", date(2025, 1, 15), date(2025, 2, 15))
            .await;
        assert!(after_termination.is_ok());

        let before_termination = service
            .create("d-1", "le-1", "f-1", date(2025, 1, 5), date(2025, 1, 8))
            .await
            .unwrap_err();
        assert!(matches!(before_termination, DomainError::Conflict(_)));
    }

    #[tokio::test]
    async fn deleted_contract_does_not_block() {
        let contracts = InMemoryContractRepository::new().with_contract(january_contract());
        contracts.soft_delete("existing").await.unwrap();
        let service = create_service(contracts);

        let result = service
            .create("d-1", "le-1", "f-1", date(2025, 1, 15), date(2025, 2, 15))
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn create_rejects_non_positive_range() {
        let service = create_service(InMemoryContractRepository::new());

        for (start, end) in [
            (date(2025, 1, 31), date(2025, 1, 1)),
            (date(2025, 1, 1), date(2025, 1, 1)),
        ] {
            let err = service
                .create("d-1", "le-1", "f-1", start, end)
                .await
                .unwrap_err();
            assert!(matches!(err, DomainError::InvalidInput(_)));
        }
    }

    #[tokio::test]
    async fn create_rejects_empty_ids() {
        let service = create_service(InMemoryContractRepository::new());

        let err = service
            .create("d-1", "", "f-1", date(2025, 1, 1), date(2025, 1, 31))
            .await
            .unwrap_err();

        assert!(matches!(err, DomainError::InvalidInput(_)));
    }

    #[tokio::test]
    async fn create_with_missing_references() {
        let service = create_service(InMemoryContractRepository::new());

        for (driver, legal_entity, fleet) in [
            ("d-404", "le-1", "f-1"),
            ("d-1", "le-404", "f-1"),
            ("d-1", "le-1", "f-404"),
        ] {
            let err = service
                .create(driver, legal_entity, fleet, date(2025, 1, 1), date(2025, 1, 31))
                .await
                .unwrap_err();
            assert!(matches!(err, DomainError::NotFound(_)));
        }
    }

    // =========================================================================
    // terminate tests
    // =========================================================================

    #[tokio::test]
    async fn terminate_stamps_clock_and_terminator() {
        let service =
            create_service(InMemoryContractRepository::new().with_contract(january_contract()));

        let contract = service.terminate("existing", " fleet-manager ").await.unwrap();

        assert_eq!(contract.terminated_at, Some(at(2025, 1, 10, 12, 0, 0)));
        assert_eq!(contract.terminated_by.as_deref(), Some("fleet-manager"));
        assert_eq!(service.get("existing").await.unwrap(), contract);
    }

    #[tokio::test]
    async fn terminate_twice_is_conflict() {
        let service =
            create_service(InMemoryContractRepository::new().with_contract(january_contract()));

        service.terminate("existing", "ops").await.unwrap();
        let err = service.terminate("existing", "ops").await.unwrap_err();

        assert!(matches!(err, DomainError::Conflict(_)));
    }

    #[tokio::test]
    async fn terminate_requires_terminator() {
        let service =
            create_service(InMemoryContractRepository::new().with_contract(january_contract()));

        let err = service.terminate("existing", "  ").await.unwrap_err();

        assert!(matches!(err, DomainError::InvalidInput(_)));
    }

    #[tokio::test]
    async fn terminate_missing_contract() {
        let service = create_service(InMemoryContractRepository::new());

        let err = service.terminate("nope", "ops").await.unwrap_err();

        assert!(matches!(err, DomainError::NotFound(_)));
    }

    // =========================================================================
    // listing and lifecycle tests
    // =========================================================================

    #[tokio::test]
    async fn list_by_driver_orders_by_start_date() {
        let service = create_service(InMemoryContractRepository::new());
        service
            .create("d-1", "le-1", "f-1", date(2025, 3, 1), date(2025, 3, 31))
            .await
            .unwrap();
        service
            .create("d-1", "le-1", "f-1", date(2025, 1, 1), date(2025, 1, 31))
            .await
            .unwrap();

        let contracts = service.list_by_driver("d-1").await.unwrap();

        assert_eq!(contracts.len(), 2);
        assert_eq!(contracts[0].start_date, date(2025, 1, 1));
        assert_eq!(contracts[1].start_date, date(2025, 3, 1));
    }

    #[tokio::test]
    async fn delete_and_undelete_contract() {
        let service =
            create_service(InMemoryContractRepository::new().with_contract(january_contract()));

        service.delete("existing").await.unwrap();
        assert!(matches!(
            service.delete("existing").await.unwrap_err(),
            DomainError::AlreadyDeleted(_)
        ));
        assert!(service.list_by_driver("d-1").await.unwrap().is_empty());

        service.undelete("existing").await.unwrap();
        assert_eq!(service.list_by_driver("d-1").await.unwrap().len(), 1);
    }
}
