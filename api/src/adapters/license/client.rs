//! License validation service client

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::domain::entities::LicenseVerdict;
use crate::domain::ports::LicenseValidator;
use crate::error::DomainError;

/// Client for the license register's validation endpoint
///
/// Without an endpoint every check fails with `ValidationServiceUnavailable`,
/// so drivers cannot be registered until one is configured.
pub struct LicenseValidatorClient {
    http: Client,
    endpoint: Option<String>,
}

impl LicenseValidatorClient {
    pub fn new(base_url: Option<String>, timeout: Duration) -> Result<Self, DomainError> {
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| DomainError::Internal(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http,
            endpoint: base_url
                .map(|url| format!("{}/v1/licenses/validate", url.trim_end_matches('/'))),
        })
    }

    pub fn is_configured(&self) -> bool {
        self.endpoint.is_some()
    }
}

#[derive(Serialize)]
struct ValidateRequest<'a> {
    first_name: &'a str,
    last_name: &'a str,
    license_number: &'a str,
}

#[derive(Deserialize)]
struct ValidateResponse {
    result: String,
}

#[async_trait]
impl LicenseValidator for LicenseValidatorClient {
    async fn validate_license(
        &self,
        first_name: &str,
        last_name: &str,
        license_number: &str,
    ) -> Result<LicenseVerdict, DomainError> {
        let endpoint = self.endpoint.as_deref().ok_or_else(|| {
            DomainError::ValidationServiceUnavailable(
                "license validator is not configured".to_string(),
            )
        })?;

        let response = self
            .http
            .post(endpoint)
            .json(&ValidateRequest {
                first_name,
                last_name,
                license_number,
            })
            .send()
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "License validator request failed");
                DomainError::ValidationServiceUnavailable(e.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            tracing::error!(status = status.as_u16(), "License validator returned an error");
            return Err(DomainError::ValidationServiceUnavailable(format!(
                "license validator returned {}",
                status.as_u16()
            )));
        }

        let body: ValidateResponse = response.json().await.map_err(|e| {
            DomainError::Internal(format!("invalid license validator response: {}", e))
        })?;

        Ok(LicenseVerdict::from_service(&body.result))
    }
}
