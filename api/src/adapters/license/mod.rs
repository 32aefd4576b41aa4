//! License register adapter
//!
//! HTTP client for the external license validation service.

pub mod client;

pub use client::LicenseValidatorClient;
