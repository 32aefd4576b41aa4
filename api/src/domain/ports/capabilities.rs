//! Clock and id generation capabilities
//!
//! Services receive these as constructor parameters so tests can pin time
//! and ids.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Source of the current instant
pub type Clock = Arc<dyn Fn() -> DateTime<Utc> + Send + Sync>;

/// Source of fresh entity ids
pub type IdGenerator = Arc<dyn Fn() -> String + Send + Sync>;

/// Wall clock in UTC
pub fn system_clock() -> Clock {
    Arc::new(Utc::now)
}

/// Random UUID v4 ids
pub fn uuid_generator() -> IdGenerator {
    Arc::new(|| Uuid::new_v4().to_string())
}
