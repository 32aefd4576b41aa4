//! Application layer
//!
//! Contains use cases and service orchestration.
//! Services coordinate between domain entities and ports; they never see a
//! concrete adapter.

pub mod assignment_service;
pub mod contract_service;
pub mod driver_service;
pub mod fleet_service;
pub mod legal_entity_service;
mod validation;
pub mod vehicle_service;

pub use assignment_service::VehicleAssignmentService;
pub use contract_service::ContractService;
pub use driver_service::DriverService;
pub use fleet_service::FleetService;
pub use legal_entity_service::LegalEntityService;
pub use vehicle_service::{NewVehicle, VehicleService};
