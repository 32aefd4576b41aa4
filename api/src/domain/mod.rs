//! Domain layer
//!
//! Contains pure business logic; no I/O happens here.
//! - `entities`: Domain models representing core business concepts
//! - `ports`: Trait definitions for external dependencies

pub mod entities;
pub mod ports;
