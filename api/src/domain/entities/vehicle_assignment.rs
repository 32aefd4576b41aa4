//! Vehicle assignment domain entity
//!
//! A driver checks a vehicle out under an active contract. The assignment
//! stays active until the vehicle is returned (`end_time` set).

use chrono::{DateTime, Utc};
use serde::Serialize;

/// A vehicle checked out by a driver under a contract
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VehicleAssignment {
    pub id: String,
    pub driver_id: String,
    pub vehicle_id: String,
    pub contract_id: String,
    pub start_time: DateTime<Utc>,
    /// `None` while the vehicle is checked out
    pub end_time: Option<DateTime<Utc>>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl VehicleAssignment {
    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }

    pub fn is_returned(&self) -> bool {
        self.end_time.is_some()
    }

    /// Not returned and not soft-deleted
    pub fn is_active(&self) -> bool {
        !self.is_returned() && !self.is_deleted()
    }
}
