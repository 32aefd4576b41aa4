//! Mock implementations of port traits

use std::sync::Mutex;

use async_trait::async_trait;

use crate::domain::entities::LicenseVerdict;
use crate::domain::ports::LicenseValidator;
use crate::error::DomainError;

enum Outcome {
    Verdict(LicenseVerdict),
    Unavailable,
}

/// License validator returning a scripted outcome and recording its inputs
pub struct MockLicenseValidator {
    outcome: Outcome,
    calls: Mutex<Vec<(String, String, String)>>,
}

impl MockLicenseValidator {
    pub fn returning(verdict: LicenseVerdict) -> Self {
        Self {
            outcome: Outcome::Verdict(verdict),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn valid() -> Self {
        Self::returning(LicenseVerdict::Valid)
    }

    pub fn unavailable() -> Self {
        Self {
            outcome: Outcome::Unavailable,
            calls: Mutex::new(Vec::new()),
        }
    }

    /// (first name, last name, license number) of every call so far
    pub fn calls(&self) -> Vec<(String, String, String)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl LicenseValidator for MockLicenseValidator {
    async fn validate_license(
        &self,
        first_name: &str,
        last_name: &str,
        license_number: &str,
    ) -> Result<LicenseVerdict, DomainError> {
        self.calls.lock().unwrap().push((
            first_name.to_string(),
            last_name.to_string(),
            license_number.to_string(),
        ));
        match self.outcome {
            Outcome::Verdict(verdict) => Ok(verdict),
            Outcome::Unavailable => Err(DomainError::ValidationServiceUnavailable(
                "mock validator offline".to_string(),
            )),
        }
    }
}
