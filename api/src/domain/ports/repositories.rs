//! Repository port traits
//!
//! These traits define the interface for data persistence.
//! Implementations are provided by adapters (in-memory, PostgreSQL).
//!
//! Shared contract for every repository:
//! - `save` inserts or replaces the whole record
//! - `find_by_id` and list queries never return soft-deleted records
//! - `soft_delete` fails with `NotFound` for unknown ids and
//!   `AlreadyDeleted` for tombstoned records
//! - `undelete` fails with `NotFound` for unknown ids and is a no-op for
//!   live records

use async_trait::async_trait;

use crate::domain::entities::{Contract, Driver, Fleet, LegalEntity, Vehicle, VehicleAssignment};
use crate::error::DomainError;

/// Repository for LegalEntity entities
#[async_trait]
pub trait LegalEntityRepository: Send + Sync {
    async fn save(&self, entity: &LegalEntity) -> Result<(), DomainError>;

    async fn find_by_id(&self, id: &str) -> Result<Option<LegalEntity>, DomainError>;

    /// All live legal entities, ordered by id
    async fn find_all(&self) -> Result<Vec<LegalEntity>, DomainError>;

    async fn soft_delete(&self, id: &str) -> Result<(), DomainError>;

    async fn undelete(&self, id: &str) -> Result<(), DomainError>;
}

/// Repository for Fleet entities
#[async_trait]
pub trait FleetRepository: Send + Sync {
    async fn save(&self, fleet: &Fleet) -> Result<(), DomainError>;

    async fn find_by_id(&self, id: &str) -> Result<Option<Fleet>, DomainError>;

    /// Live fleets owned by a legal entity, ordered by id
    async fn find_by_legal_entity(&self, legal_entity_id: &str)
        -> Result<Vec<Fleet>, DomainError>;

    async fn soft_delete(&self, id: &str) -> Result<(), DomainError>;

    async fn undelete(&self, id: &str) -> Result<(), DomainError>;
}

/// Repository for Vehicle entities
#[async_trait]
pub trait VehicleRepository: Send + Sync {
    async fn save(&self, vehicle: &Vehicle) -> Result<(), DomainError>;

    async fn find_by_id(&self, id: &str) -> Result<Option<Vehicle>, DomainError>;

    /// Live vehicles in a fleet, ordered by id
    async fn find_by_fleet(&self, fleet_id: &str) -> Result<Vec<Vehicle>, DomainError>;

    /// Fleet a vehicle belongs to, soft-deleted or not
    async fn find_fleet_id(&self, id: &str) -> Result<Option<String>, DomainError>;

    async fn soft_delete(&self, id: &str) -> Result<(), DomainError>;

    async fn undelete(&self, id: &str) -> Result<(), DomainError>;
}

/// Repository for Driver entities
#[async_trait]
pub trait DriverRepository: Send + Sync {
    async fn save(&self, driver: &Driver) -> Result<(), DomainError>;

    async fn find_by_id(&self, id: &str) -> Result<Option<Driver>, DomainError>;

    /// All live drivers, ordered by id
    async fn find_all(&self) -> Result<Vec<Driver>, DomainError>;

    async fn soft_delete(&self, id: &str) -> Result<(), DomainError>;

    async fn undelete(&self, id: &str) -> Result<(), DomainError>;
}

/// Repository for Contract entities
#[async_trait]
pub trait ContractRepository: Send + Sync {
    async fn save(&self, contract: &Contract) -> Result<(), DomainError>;

    async fn find_by_id(&self, id: &str) -> Result<Option<Contract>, DomainError>;

    /// Live contracts signed by a driver, ordered by start date
    async fn find_by_driver(&self, driver_id: &str) -> Result<Vec<Contract>, DomainError>;

    async fn soft_delete(&self, id: &str) -> Result<(), DomainError>;

    async fn undelete(&self, id: &str) -> Result<(), DomainError>;
}

/// Repository for VehicleAssignment entities
#[async_trait]
pub trait VehicleAssignmentRepository: Send + Sync {
    async fn save(&self, assignment: &VehicleAssignment) -> Result<(), DomainError>;

    async fn find_by_id(&self, id: &str) -> Result<Option<VehicleAssignment>, DomainError>;

    /// Live assignments made under a contract, ordered by start time
    async fn find_by_contract(
        &self,
        contract_id: &str,
    ) -> Result<Vec<VehicleAssignment>, DomainError>;

    /// Assignments of a driver that are neither returned nor deleted
    async fn find_active_by_driver(
        &self,
        driver_id: &str,
    ) -> Result<Vec<VehicleAssignment>, DomainError>;

    /// The active assignment of a driver on any vehicle of a fleet, if one exists
    async fn find_active_by_driver_and_fleet(
        &self,
        driver_id: &str,
        fleet_id: &str,
    ) -> Result<Option<VehicleAssignment>, DomainError>;

    async fn soft_delete(&self, id: &str) -> Result<(), DomainError>;

    async fn undelete(&self, id: &str) -> Result<(), DomainError>;
}
