//! Domain ports (traits)
//!
//! Port traits define interfaces that the domain layer requires.
//! Adapters provide concrete implementations of these traits.

pub mod capabilities;
pub mod license;
pub mod repositories;

pub use capabilities::{system_clock, uuid_generator, Clock, IdGenerator};
pub use license::LicenseValidator;
pub use repositories::{
    ContractRepository, DriverRepository, FleetRepository, LegalEntityRepository,
    VehicleAssignmentRepository, VehicleRepository,
};
