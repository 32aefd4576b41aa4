//! Vehicle assignment service
//!
//! Hands vehicles out to drivers under active contracts and takes them
//! back. A driver holds at most one active assignment per fleet.
//!
//! Like the contract overlap check, the exclusivity check is a read
//! followed by a write with no lock held in between; it rejects conflicts
//! visible at evaluation time only.

use std::sync::Arc;

use crate::app::validation::{next_id, require_id};
use crate::domain::entities::VehicleAssignment;
use crate::domain::ports::{
    Clock, ContractRepository, IdGenerator, VehicleAssignmentRepository, VehicleRepository,
};
use crate::error::DomainError;

/// Service for checking vehicles out and in
pub struct VehicleAssignmentService<CR, VR, AR>
where
    CR: ContractRepository,
    VR: VehicleRepository,
    AR: VehicleAssignmentRepository,
{
    contracts: Arc<CR>,
    vehicles: Arc<VR>,
    assignments: Arc<AR>,
    ids: IdGenerator,
    clock: Clock,
}

impl<CR, VR, AR> VehicleAssignmentService<CR, VR, AR>
where
    CR: ContractRepository,
    VR: VehicleRepository,
    AR: VehicleAssignmentRepository,
{
    pub fn new(
        contracts: Arc<CR>,
        vehicles: Arc<VR>,
        assignments: Arc<AR>,
        ids: IdGenerator,
        clock: Clock,
    ) -> Self {
        Self {
            contracts,
            vehicles,
            assignments,
            ids,
            clock,
        }
    }

    /// Check a vehicle out to the contract's driver
    ///
    /// Fails with:
    /// - `InvalidInput` for empty ids or a vehicle outside the contract's fleet
    /// - `NotFound` when the contract or vehicle is missing
    /// - `ContractNotActive` outside the contract's window or after termination
    /// - `DriverAlreadyAssignedInFleet` when the driver already has a vehicle
    ///   from this fleet
    pub async fn assign(
        &self,
        contract_id: &str,
        vehicle_id: &str,
    ) -> Result<VehicleAssignment, DomainError> {
        if contract_id.is_empty() || vehicle_id.is_empty() {
            return Err(DomainError::InvalidInput(
                "contract_id and vehicle_id are required".to_string(),
            ));
        }

        let contract = self
            .contracts
            .find_by_id(contract_id)
            .await?
            .ok_or_else(|| DomainError::NotFound(format!("Contract {} not found", contract_id)))?;
        let vehicle = self
            .vehicles
            .find_by_id(vehicle_id)
            .await?
            .ok_or_else(|| DomainError::NotFound(format!("Vehicle {} not found", vehicle_id)))?;

        if vehicle.fleet_id != contract.fleet_id {
            return Err(DomainError::InvalidInput(
                "vehicle must belong to the contract's fleet".to_string(),
            ));
        }

        let now = (self.clock)();
        if !contract.is_active_at(now) {
            tracing::debug!(contract_id = %contract_id, "Rejected assignment on inactive contract");
            return Err(DomainError::ContractNotActive);
        }

        if let Some(existing) = self
            .assignments
            .find_active_by_driver_and_fleet(&contract.driver_id, &vehicle.fleet_id)
            .await?
        {
            tracing::debug!(
                driver_id = %contract.driver_id,
                existing_id = %existing.id,
                "Rejected second assignment in fleet"
            );
            return Err(DomainError::DriverAlreadyAssignedInFleet);
        }

        let assignment = VehicleAssignment {
            id: next_id(&self.ids)?,
            driver_id: contract.driver_id,
            vehicle_id: vehicle_id.to_string(),
            contract_id: contract_id.to_string(),
            start_time: now,
            end_time: None,
            deleted_at: None,
        };

        if let Err(e) = self.assignments.save(&assignment).await {
            tracing::error!(id = %assignment.id, error = %e, "Failed to save vehicle assignment");
            return Err(e);
        }
        tracing::info!(
            id = %assignment.id,
            driver_id = %assignment.driver_id,
            vehicle_id = %vehicle_id,
            "Created vehicle assignment"
        );

        Ok(assignment)
    }

    pub async fn get(&self, id: &str) -> Result<VehicleAssignment, DomainError> {
        require_id(id, "id")?;
        self.assignments
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::NotFound(format!("Vehicle assignment {} not found", id)))
    }

    /// Live assignments of a contract, earliest start first
    pub async fn list_by_contract(
        &self,
        contract_id: &str,
    ) -> Result<Vec<VehicleAssignment>, DomainError> {
        require_id(contract_id, "contract_id")?;
        self.assignments.find_by_contract(contract_id).await
    }

    /// Check a vehicle back in
    pub async fn return_vehicle(&self, id: &str) -> Result<VehicleAssignment, DomainError> {
        let mut assignment = self.get(id).await?;
        if assignment.is_returned() {
            return Err(DomainError::Conflict("vehicle already returned".to_string()));
        }

        assignment.end_time = Some((self.clock)());

        if let Err(e) = self.assignments.save(&assignment).await {
            tracing::error!(id = %id, error = %e, "Failed to save returned assignment");
            return Err(e);
        }
        tracing::info!(id = %id, "Returned vehicle assignment");

        Ok(assignment)
    }

    pub async fn delete(&self, id: &str) -> Result<(), DomainError> {
        require_id(id, "id")?;
        self.assignments.soft_delete(id).await?;
        tracing::info!(id = %id, "Deleted vehicle assignment");
        Ok(())
    }

    pub async fn undelete(&self, id: &str) -> Result<(), DomainError> {
        require_id(id, "id")?;
        self.assignments.undelete(id).await?;
        tracing::info!(id = %id, "Undeleted vehicle assignment");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::{
        InMemoryContractRepository, InMemoryVehicleAssignmentRepository,
        InMemoryVehicleRepository,
    };
    use crate::domain::entities::Contract;
    use crate::test_utils::{
        at, date, fixed_clock, sequential_ids, test_assignment, test_contract, test_vehicle,
    };
    use chrono::{DateTime, Utc};

    type TestAssignmentService = VehicleAssignmentService<
        InMemoryContractRepository,
        InMemoryVehicleRepository,
        InMemoryVehicleAssignmentRepository,
    >;

    struct Setup {
        contracts: Vec<Contract>,
        assignments: Vec<VehicleAssignment>,
        now: DateTime<Utc>,
    }

    impl Default for Setup {
        fn default() -> Self {
            Self {
                contracts: vec![january_contract("c-1", "f-1")],
                assignments: vec![],
                now: at(2025, 1, 15, 9, 0, 0),
            }
        }
    }

    fn january_contract(id: &str, fleet_id: &str) -> Contract {
        let mut contract = test_contract(id, "d-1", date(2025, 1, 1), date(2025, 1, 31));
        contract.fleet_id = fleet_id.to_string();
        contract
    }

    fn create_service(setup: Setup) -> TestAssignmentService {
        let contracts = setup
            .contracts
            .into_iter()
            .fold(InMemoryContractRepository::new(), |repo, c| repo.with_contract(c));
        let vehicles = Arc::new(
            InMemoryVehicleRepository::new()
                .with_vehicle(test_vehicle("v-1", "f-1"))
                .with_vehicle(test_vehicle("v-2", "f-1"))
                .with_vehicle(test_vehicle("v-3", "f-2")),
        );
        let assignments = setup.assignments.into_iter().fold(
            InMemoryVehicleAssignmentRepository::new(vehicles.clone()),
            |repo, a| repo.with_assignment(a),
        );

        VehicleAssignmentService::new(
            Arc::new(contracts),
            vehicles,
            Arc::new(assignments),
            sequential_ids("a"),
            fixed_clock(setup.now),
        )
    }

    // =========================================================================
    // assign tests
    // =========================================================================

    #[tokio::test]
    async fn assign_success() {
        let service = create_service(Setup::default());

        let assignment = service.assign("c-1", "v-1").await.unwrap();

        assert_eq!(assignment.id, "a-1");
        assert_eq!(assignment.driver_id, "d-1");
        assert_eq!(assignment.vehicle_id, "v-1");
        assert_eq!(assignment.contract_id, "c-1");
        assert_eq!(assignment.start_time, at(2025, 1, 15, 9, 0, 0));
        assert!(assignment.end_time.is_none());
        assert_eq!(service.get("a-1").await.unwrap(), assignment);
    }

    #[tokio::test]
    async fn assign_rejects_second_vehicle_in_same_fleet() {
        let service = create_service(Setup::default());
        service.assign("c-1", "v-1").await.unwrap();

        let err = service.assign("c-1", "v-2").await.unwrap_err();

        assert!(matches!(err, DomainError::DriverAlreadyAssignedInFleet));
    }

    #[tokio::test]
    async fn deleting_checked_out_vehicle_keeps_driver_assigned_in_fleet() {
        let service = create_service(Setup::default());
        service.assign("c-1", "v-1").await.unwrap();
        service.vehicles.soft_delete("v-1").await.unwrap();

        let err = service.assign("c-1", "v-2").await.unwrap_err();

        assert!(matches!(err, DomainError::DriverAlreadyAssignedInFleet));
    }

    #[tokio::test]
    async fn assign_allowed_in_other_fleet() {
        let service = create_service(Setup {
            contracts: vec![january_contract("c-1", "f-1"), january_contract("c-2", "f-2")],
            ..Setup::default()
        });
        service.assign("c-1", "v-1").await.unwrap();

        let result = service.assign("c-2", "v-3").await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn assign_allowed_again_after_return() {
        let service = create_service(Setup::default());
        let first = service.assign("c-1", "v-1").await.unwrap();
        service.return_vehicle(&first.id).await.unwrap();

        let second = service.assign("c-1", "v-2").await;

        assert!(second.is_ok());
    }

    #[tokio::test]
    async fn assign_rejects_vehicle_outside_contract_fleet() {
        let service = create_service(Setup::default());

        let err = service.assign("c-1", "v-3").await.unwrap_err();

        assert!(matches!(err, DomainError::InvalidInput(_)));
    }

    #[tokio::test]
    async fn assign_rejects_before_start() {
        let service = create_service(Setup {
            now: at(2024, 12, 31, 23, 59, 59),
            ..Setup::default()
        });

        let err = service.assign("c-1", "v-1").await.unwrap_err();

        assert!(matches!(err, DomainError::ContractNotActive));
    }

    #[tokio::test]
    async fn assign_on_last_day_of_contract() {
        let service = create_service(Setup {
            now: at(2025, 1, 31, 23, 59, 59),
            ..Setup::default()
        });

        assert!(service.assign("c-1", "v-1").await.is_ok());
    }

    #[tokio::test]
    async fn assign_rejects_after_end_date() {
        let service = create_service(Setup {
            now: at(2025, 2, 1, 0, 0, 1),
            ..Setup::default()
        });

        let err = service.assign("c-1", "v-1").await.unwrap_err();

        assert!(matches!(err, DomainError::ContractNotActive));
    }

    #[tokio::test]
    async fn assign_rejects_after_termination() {
        let mut contract = january_contract("c-1", "f-1");
        contract.terminated_at = Some(at(2025, 1, 10, 0, 0, 0));
        let service = create_service(Setup {
            contracts: vec![contract],
            ..Setup::default()
        });

        let err = service.assign("c-1", "v-1").await.unwrap_err();

        assert!(matches!(err, DomainError::ContractNotActive));
    }

    #[tokio::test]
    async fn assign_missing_contract_or_vehicle() {
        let service = create_service(Setup::default());

        assert!(matches!(
            service.assign("c-404", "v-1").await.unwrap_err(),
            DomainError::NotFound(_)
        ));
        assert!(matches!(
            service.assign("c-1", "v-404").await.unwrap_err(),
            DomainError::NotFound(_)
        ));
        assert!(matches!(
            service.assign("", "v-1").await.unwrap_err(),
            DomainError::InvalidInput(_)
        ));
    }

    #[tokio::test]
    async fn existing_assignment_from_other_contract_counts() {
        let service = create_service(Setup {
            assignments: vec![test_assignment("a-old", "d-1", "v-2", "c-other")],
            ..Setup::default()
        });

        let err = service.assign("c-1", "v-1").await.unwrap_err();

        assert!(matches!(err, DomainError::DriverAlreadyAssignedInFleet));
    }

    // =========================================================================
    // return and lifecycle tests
    // =========================================================================

    #[tokio::test]
    async fn return_stamps_end_time() {
        let service = create_service(Setup::default());
        let assignment = service.assign("c-1", "v-1").await.unwrap();

        let returned = service.return_vehicle(&assignment.id).await.unwrap();

        assert_eq!(returned.end_time, Some(at(2025, 1, 15, 9, 0, 0)));
        assert_eq!(service.get(&assignment.id).await.unwrap(), returned);
    }

    #[tokio::test]
    async fn return_twice_is_conflict() {
        let service = create_service(Setup::default());
        let assignment = service.assign("c-1", "v-1").await.unwrap();
        service.return_vehicle(&assignment.id).await.unwrap();

        let err = service.return_vehicle(&assignment.id).await.unwrap_err();

        assert!(matches!(err, DomainError::Conflict(_)));
    }

    #[tokio::test]
    async fn return_missing_assignment() {
        let service = create_service(Setup::default());

        assert!(matches!(
            service.return_vehicle("nope").await.unwrap_err(),
            DomainError::NotFound(_)
        ));
        assert!(matches!(
            service.return_vehicle("").await.unwrap_err(),
            DomainError::InvalidInput(_)
        ));
    }

    #[tokio::test]
    async fn list_by_contract_in_start_order() {
        let mut early = test_assignment("a-early", "d-1", "v-1", "c-1");
        early.start_time = at(2025, 1, 2, 8, 0, 0);
        early.end_time = Some(at(2025, 1, 2, 17, 0, 0));
        let mut late = test_assignment("a-late", "d-1", "v-2", "c-1");
        late.start_time = at(2025, 1, 5, 8, 0, 0);
        late.end_time = Some(at(2025, 1, 5, 17, 0, 0));
        let service = create_service(Setup {
            assignments: vec![late, early],
            ..Setup::default()
        });

        let ids: Vec<_> = service
            .list_by_contract("c-1")
            .await
            .unwrap()
            .into_iter()
            .map(|a| a.id)
            .collect();

        assert_eq!(ids, vec!["a-early", "a-late"]);
    }

    #[tokio::test]
    async fn deleted_assignment_no_longer_blocks() {
        let service = create_service(Setup::default());
        let assignment = service.assign("c-1", "v-1").await.unwrap();

        service.delete(&assignment.id).await.unwrap();
        assert!(matches!(
            service.delete(&assignment.id).await.unwrap_err(),
            DomainError::AlreadyDeleted(_)
        ));

        assert!(service.assign("c-1", "v-2").await.is_ok());
    }

    #[tokio::test]
    async fn undelete_restores_assignment() {
        let service = create_service(Setup::default());
        let assignment = service.assign("c-1", "v-1").await.unwrap();
        service.delete(&assignment.id).await.unwrap();

        service.undelete(&assignment.id).await.unwrap();

        assert_eq!(service.get(&assignment.id).await.unwrap(), assignment);
    }
}
