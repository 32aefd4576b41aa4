//! Vehicle domain entity

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Oldest model year accepted for a vehicle
pub const MIN_VEHICLE_YEAR: i32 = 1900;

/// Newest model year accepted for a vehicle
pub const MAX_VEHICLE_YEAR: i32 = 2100;

/// A vehicle belonging to exactly one fleet
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Vehicle {
    pub id: String,
    pub fleet_id: String,
    pub make: String,
    pub model: String,
    pub year: i32,
    pub license_plate: String,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Vehicle {
    /// Check a model year against the accepted range
    pub fn year_in_range(year: i32) -> bool {
        (MIN_VEHICLE_YEAR..=MAX_VEHICLE_YEAR).contains(&year)
    }
}
