//! Adapters layer
//!
//! Implementations of port traits for external systems.

pub mod license;
pub mod memory;
pub mod postgres;

pub use license::LicenseValidatorClient;
pub use memory::{
    InMemoryContractRepository, InMemoryDriverRepository, InMemoryFleetRepository,
    InMemoryLegalEntityRepository, InMemoryVehicleAssignmentRepository,
    InMemoryVehicleRepository,
};
pub use postgres::{
    ensure_schema, PostgresContractRepository, PostgresDriverRepository, PostgresFleetRepository,
    PostgresLegalEntityRepository, PostgresVehicleAssignmentRepository,
    PostgresVehicleRepository,
};
