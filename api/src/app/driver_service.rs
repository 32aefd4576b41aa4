//! Driver service
//!
//! Drivers are only registered once the license register confirms their
//! license, and cannot be deleted while contracts or vehicle assignments
//! still depend on them.

use std::sync::Arc;

use crate::app::validation::{next_id, require_id, require_text};
use crate::domain::entities::{Driver, LicenseVerdict};
use crate::domain::ports::{
    Clock, ContractRepository, DriverRepository, IdGenerator, LicenseValidator,
    VehicleAssignmentRepository,
};
use crate::error::DomainError;

/// Service for driver registration and lifecycle
pub struct DriverService<DR, CR, AR, LV>
where
    DR: DriverRepository,
    CR: ContractRepository,
    AR: VehicleAssignmentRepository,
    LV: LicenseValidator,
{
    drivers: Arc<DR>,
    contracts: Arc<CR>,
    assignments: Arc<AR>,
    validator: Arc<LV>,
    ids: IdGenerator,
    clock: Clock,
}

impl<DR, CR, AR, LV> DriverService<DR, CR, AR, LV>
where
    DR: DriverRepository,
    CR: ContractRepository,
    AR: VehicleAssignmentRepository,
    LV: LicenseValidator,
{
    pub fn new(
        drivers: Arc<DR>,
        contracts: Arc<CR>,
        assignments: Arc<AR>,
        validator: Arc<LV>,
        ids: IdGenerator,
        clock: Clock,
    ) -> Self {
        Self {
            drivers,
            contracts,
            assignments,
            validator,
            ids,
            clock,
        }
    }

    /// Register a driver after a successful license check
    ///
    /// All fields are trimmed and required. Any verdict other than
    /// `Valid` fails with `LicenseValidationFailed`; an unreachable register
    /// fails with `ValidationServiceUnavailable` and nothing is stored.
    pub async fn create(
        &self,
        first_name: &str,
        last_name: &str,
        license_number: &str,
    ) -> Result<Driver, DomainError> {
        let first_name = require_text(first_name, "first_name")?;
        let last_name = require_text(last_name, "last_name")?;
        let license_number = require_text(license_number, "license_number")?;

        let verdict = self
            .validator
            .validate_license(&first_name, &last_name, &license_number)
            .await?;
        if !verdict.is_valid() {
            tracing::info!(verdict = %verdict, "License check rejected driver");
            return Err(DomainError::LicenseValidationFailed(verdict));
        }

        let driver = Driver {
            id: next_id(&self.ids)?,
            first_name,
            last_name,
            license_number,
            deleted_at: None,
        };

        if let Err(e) = self.drivers.save(&driver).await {
            tracing::error!(id = %driver.id, error = %e, "Failed to save driver");
            return Err(e);
        }
        tracing::info!(id = %driver.id, "Created driver");

        Ok(driver)
    }

    pub async fn get(&self, id: &str) -> Result<Driver, DomainError> {
        require_id(id, "id")?;
        self.drivers
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::NotFound(format!("Driver {} not found", id)))
    }

    pub async fn list(&self) -> Result<Vec<Driver>, DomainError> {
        self.drivers.find_all().await
    }

    /// Soft-delete a driver
    ///
    /// Contracts are checked before assignments, so a driver blocked by
    /// both gets `DriverHasActiveContracts`.
    pub async fn delete(&self, id: &str) -> Result<(), DomainError> {
        require_id(id, "id")?;
        let now = (self.clock)();

        let contracts = self.contracts.find_by_driver(id).await?;
        if contracts.iter().any(|c| c.blocks_driver_deletion(now)) {
            return Err(DomainError::DriverHasActiveContracts);
        }

        let assignments = self.assignments.find_active_by_driver(id).await?;
        if !assignments.is_empty() {
            return Err(DomainError::DriverHasActiveAssignments);
        }

        self.drivers.soft_delete(id).await?;
        tracing::info!(id = %id, "Deleted driver");
        Ok(())
    }

    pub async fn undelete(&self, id: &str) -> Result<(), DomainError> {
        require_id(id, "id")?;
        self.drivers.undelete(id).await?;
        tracing::info!(id = %id, "Undeleted driver");
        Ok(())
    }

    /// Re-run the license check for a stored driver and return the raw verdict
    pub async fn validate_license(&self, id: &str) -> Result<LicenseVerdict, DomainError> {
        let driver = self.get(id).await?;
        let verdict = self
            .validator
            .validate_license(
                &driver.first_name,
                &driver.last_name,
                &driver.license_number,
            )
            .await?;
        tracing::debug!(id = %id, verdict = %verdict, "Re-validated driver license");
        Ok(verdict)
    }
}
