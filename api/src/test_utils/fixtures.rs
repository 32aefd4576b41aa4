//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.
//! Each fixture function creates a valid entity that can be customized.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::{DateTime, NaiveDate, TimeZone, Utc};

use crate::domain::entities::{Contract, Driver, Fleet, LegalEntity, Vehicle, VehicleAssignment};
use crate::domain::ports::{Clock, IdGenerator};

/// Calendar date shorthand
pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// UTC instant shorthand
pub fn at(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, h, min, s).unwrap()
}

/// A clock frozen at `now`
pub fn fixed_clock(now: DateTime<Utc>) -> Clock {
    Arc::new(move || now)
}

/// Ids `{prefix}-1`, `{prefix}-2`, ...
pub fn sequential_ids(prefix: &str) -> IdGenerator {
    let prefix = prefix.to_string();
    let counter = AtomicU64::new(0);
    Arc::new(move || {
        let n = counter.fetch_add(1, Ordering::SeqCst) + 1;
        format!("{}-{}", prefix, n)
    })
}

/// An id generator that always fails
pub fn empty_ids() -> IdGenerator {
    Arc::new(String::new)
}

/// Create a test legal entity with default values
pub fn test_legal_entity(id: &str) -> LegalEntity {
    LegalEntity {
        id: id.to_string(),
        name: format!("Leasing Co {}", id),
        tax_id: format!("TAX-{}", id),
        deleted_at: None,
    }
}

/// Create a test fleet owned by `legal_entity_id`
pub fn test_fleet(id: &str, legal_entity_id: &str) -> Fleet {
    Fleet {
        id: id.to_string(),
        legal_entity_id: legal_entity_id.to_string(),
        name: format!("Fleet {}", id),
        deleted_at: None,
    }
}

/// Create a test vehicle in `fleet_id`
pub fn test_vehicle(id: &str, fleet_id: &str) -> Vehicle {
    Vehicle {
        id: id.to_string(),
        fleet_id: fleet_id.to_string(),
        make: "Toyota".to_string(),
        model: "Corolla".to_string(),
        year: 2022,
        license_plate: format!("PL-{}", id),
        deleted_at: None,
    }
}

/// Create a test driver with default values
pub fn test_driver(id: &str) -> Driver {
    Driver {
        id: id.to_string(),
        first_name: "Jane".to_string(),
        last_name: "Doe".to_string(),
        license_number: format!("LIC-{}", id),
        deleted_at: None,
    }
}

/// Create a contract for `driver_id` with legal entity `le-1` and fleet `f-1`
pub fn test_contract(id: &str, driver_id: &str, start: NaiveDate, end: NaiveDate) -> Contract {
    Contract {
        id: id.to_string(),
        driver_id: driver_id.to_string(),
        legal_entity_id: "le-1".to_string(),
        fleet_id: "f-1".to_string(),
        start_date: start,
        end_date: end,
        terminated_at: None,
        terminated_by: None,
        deleted_at: None,
    }
}

/// Create a checked-out assignment
pub fn test_assignment(
    id: &str,
    driver_id: &str,
    vehicle_id: &str,
    contract_id: &str,
) -> VehicleAssignment {
    VehicleAssignment {
        id: id.to_string(),
        driver_id: driver_id.to_string(),
        vehicle_id: vehicle_id.to_string(),
        contract_id: contract_id.to_string(),
        start_time: at(2025, 1, 15, 8, 0, 0),
        end_time: None,
        deleted_at: None,
    }
}
