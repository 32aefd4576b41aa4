//! Contract domain entity
//!
//! A contract binds a driver to a (legal entity, fleet) pair for a date
//! range. The end date is inclusive: a contract ending on Jan 31 is active
//! until Feb 1 00:00 UTC. Termination cuts the contract short.

use chrono::{DateTime, NaiveDate, NaiveTime, TimeZone, Utc};
use serde::Serialize;

/// A lease contract between a driver and a legal entity for one fleet
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Contract {
    pub id: String,
    pub driver_id: String,
    pub legal_entity_id: String,
    pub fleet_id: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub terminated_at: Option<DateTime<Utc>>,
    pub terminated_by: Option<String>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Contract {
    pub fn is_terminated(&self) -> bool {
        self.terminated_at.is_some()
    }

    /// Whether this contract is for the given driver, legal entity and fleet
    pub fn covers(&self, driver_id: &str, legal_entity_id: &str, fleet_id: &str) -> bool {
        self.driver_id == driver_id
            && self.legal_entity_id == legal_entity_id
            && self.fleet_id == fleet_id
    }

    /// End date used for overlap checks: the termination date if it comes first
    pub fn effective_end(&self) -> NaiveDate {
        match self.terminated_at {
            Some(terminated_at) => self.end_date.min(terminated_at.date_naive()),
            None => self.end_date,
        }
    }

    /// Whether `[start, end)` intersects `[start_date, effective_end)`
    pub fn overlaps(&self, start: NaiveDate, end: NaiveDate) -> bool {
        start < self.effective_end() && self.start_date < end
    }

    /// Whether the contract is in force at `at`
    ///
    /// Active from the first instant of `start_date` until the end of
    /// `end_date`, and never after `terminated_at`.
    pub fn is_active_at(&self, at: DateTime<Utc>) -> bool {
        if at < start_of_day(self.start_date) {
            return false;
        }
        if !self.window_open_at(at) {
            return false;
        }
        match self.terminated_at {
            Some(terminated_at) => at <= terminated_at,
            None => true,
        }
    }

    /// Whether the contract still prevents its driver from being deleted
    ///
    /// Any unterminated contract whose end date has not passed blocks,
    /// including ones that have not started yet.
    pub fn blocks_driver_deletion(&self, at: DateTime<Utc>) -> bool {
        !self.is_terminated() && self.window_open_at(at)
    }

    fn window_open_at(&self, at: DateTime<Utc>) -> bool {
        match self.end_date.succ_opt() {
            Some(day_after) => at < start_of_day(day_after),
            None => true,
        }
    }
}

/// Midnight UTC at the start of `date`
pub fn start_of_day(date: NaiveDate) -> DateTime<Utc> {
    Utc.from_utc_datetime(&date.and_time(NaiveTime::default()))
}
