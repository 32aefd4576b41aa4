//! Legal entity domain entity
//!
//! The root of ownership: legal entities own fleets and sign contracts.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// A company (or other legal person) that owns fleets
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LegalEntity {
    pub id: String,
    pub name: String,
    pub tax_id: String,
    pub deleted_at: Option<DateTime<Utc>>,
}
