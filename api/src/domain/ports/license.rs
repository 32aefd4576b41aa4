//! License validation port
//!
//! Abstracts the external service that checks a driver's name against the
//! national license register.

use async_trait::async_trait;

use crate::domain::entities::LicenseVerdict;
use crate::error::DomainError;

/// Validates driver license data against an external register
#[async_trait]
pub trait LicenseValidator: Send + Sync {
    /// Check that the license number exists and belongs to the named person.
    ///
    /// An unavailable or unconfigured service is an error
    /// (`ValidationServiceUnavailable`), never a verdict.
    async fn validate_license(
        &self,
        first_name: &str,
        last_name: &str,
        license_number: &str,
    ) -> Result<LicenseVerdict, DomainError>;
}
