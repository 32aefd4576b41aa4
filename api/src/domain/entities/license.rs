//! License validation verdicts
//!
//! Returned by the external license validation service. Only `Valid`
//! allows a driver to be created.

use serde::{Deserialize, Serialize};

/// Outcome of checking a driver's name and license number
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LicenseVerdict {
    Valid,
    NotFound,
    DataMismatch,
    Unknown,
}

impl LicenseVerdict {
    pub fn is_valid(self) -> bool {
        self == LicenseVerdict::Valid
    }

    /// Parse the verdict reported by the validation service.
    ///
    /// The service reports success as `ok`; anything unrecognised is `Unknown`.
    pub fn from_service(value: &str) -> Self {
        value.parse().unwrap_or(LicenseVerdict::Unknown)
    }
}

impl std::fmt::Display for LicenseVerdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LicenseVerdict::Valid => write!(f, "valid"),
            LicenseVerdict::NotFound => write!(f, "not_found"),
            LicenseVerdict::DataMismatch => write!(f, "data_mismatch"),
            LicenseVerdict::Unknown => write!(f, "unknown"),
        }
    }
}

impl std::str::FromStr for LicenseVerdict {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "ok" | "valid" => Ok(LicenseVerdict::Valid),
            "not_found" => Ok(LicenseVerdict::NotFound),
            "data_mismatch" => Ok(LicenseVerdict::DataMismatch),
            "unknown" => Ok(LicenseVerdict::Unknown),
            _ => Err(format!("Unknown license verdict: {}", s)),
        }
    }
}
