//! Domain entities
//!
//! Pure domain models representing the fleet-leasing concepts.
//! These are separate from the SeaORM models in the `entity` module.
//!
//! Every entity is replaced as a whole on mutation: load, modify in memory,
//! save the full record. Deletion is always a soft delete (`deleted_at`).

pub mod contract;
pub mod driver;
pub mod fleet;
pub mod legal_entity;
pub mod license;
pub mod vehicle;
pub mod vehicle_assignment;

pub use contract::Contract;
pub use driver::Driver;
pub use fleet::Fleet;
pub use legal_entity::LegalEntity;
pub use license::LicenseVerdict;
pub use vehicle::{Vehicle, MAX_VEHICLE_YEAR, MIN_VEHICLE_YEAR};
pub use vehicle_assignment::VehicleAssignment;
