//! SeaORM entity definitions
//!
//! One module per table. Column layout matches `adapters::postgres::schema`.

pub mod contracts;
pub mod drivers;
pub mod fleets;
pub mod legal_entities;
pub mod vehicle_assignments;
pub mod vehicles;
