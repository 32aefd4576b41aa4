//! In-memory adapters
//!
//! Repository implementations backed by lock-guarded hash maps. Used when no
//! database is configured, and by the service and handler tests.

pub mod assignment_repo;
pub mod contract_repo;
pub mod driver_repo;
pub mod fleet_repo;
pub mod legal_entity_repo;
mod store;
pub mod vehicle_repo;

pub use assignment_repo::InMemoryVehicleAssignmentRepository;
pub use contract_repo::InMemoryContractRepository;
pub use driver_repo::InMemoryDriverRepository;
pub use fleet_repo::InMemoryFleetRepository;
pub use legal_entity_repo::InMemoryLegalEntityRepository;
pub use vehicle_repo::InMemoryVehicleRepository;
