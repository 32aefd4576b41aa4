//! PostgreSQL adapters
//!
//! Implementations of repository traits using SeaORM and PostgreSQL.
//! Soft deletes stamp `deleted_at`; every read filters it out.

pub mod assignment_repo;
pub mod contract_repo;
pub mod driver_repo;
pub mod fleet_repo;
pub mod legal_entity_repo;
pub mod schema;
pub mod vehicle_repo;

#[cfg(test)]
mod integration_tests;

use chrono::{DateTime, Utc};
use sea_orm::prelude::DateTimeWithTimeZone;
use sea_orm::DbErr;

use crate::error::DomainError;

pub use assignment_repo::PostgresVehicleAssignmentRepository;
pub use contract_repo::PostgresContractRepository;
pub use driver_repo::PostgresDriverRepository;
pub use fleet_repo::PostgresFleetRepository;
pub use legal_entity_repo::PostgresLegalEntityRepository;
pub use schema::ensure_schema;
pub use vehicle_repo::PostgresVehicleRepository;

fn db_err(e: DbErr) -> DomainError {
    DomainError::Database(e.to_string())
}

fn to_utc(value: DateTimeWithTimeZone) -> DateTime<Utc> {
    value.with_timezone(&Utc)
}

/// Error for a soft delete that touched no live row
fn not_deleted(kind: &str, id: &str, exists: bool) -> DomainError {
    if exists {
        DomainError::AlreadyDeleted(format!("{} {} is already deleted", kind, id))
    } else {
        DomainError::NotFound(format!("{} {} not found", kind, id))
    }
}
