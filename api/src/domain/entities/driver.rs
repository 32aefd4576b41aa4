//! Driver domain entity

use chrono::{DateTime, Utc};
use serde::Serialize;

/// A person allowed to sign contracts and take vehicles out
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Driver {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub license_number: String,
    pub deleted_at: Option<DateTime<Utc>>,
}
