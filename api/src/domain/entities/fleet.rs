//! Fleet domain entity

use chrono::{DateTime, Utc};
use serde::Serialize;

/// A named group of vehicles owned by a legal entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Fleet {
    pub id: String,
    pub legal_entity_id: String,
    pub name: String,
    pub deleted_at: Option<DateTime<Utc>>,
}
