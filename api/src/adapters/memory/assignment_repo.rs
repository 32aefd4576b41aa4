//! In-memory adapter for VehicleAssignmentRepository
//!
//! Assignments do not record a fleet, so fleet lookups go through the
//! vehicle repository.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use super::store::MemoryStore;
use crate::domain::entities::VehicleAssignment;
use crate::domain::ports::{VehicleAssignmentRepository, VehicleRepository};
use crate::error::DomainError;

pub struct InMemoryVehicleAssignmentRepository {
    store: MemoryStore<VehicleAssignment>,
    vehicles: Arc<dyn VehicleRepository>,
}

impl InMemoryVehicleAssignmentRepository {
    pub fn new(vehicles: Arc<dyn VehicleRepository>) -> Self {
        Self {
            store: MemoryStore::default(),
            vehicles,
        }
    }
}

#[cfg(test)]
impl InMemoryVehicleAssignmentRepository {
    /// Pre-populate with an assignment for testing
    pub fn with_assignment(self, assignment: VehicleAssignment) -> Self {
        self.store.upsert(assignment).unwrap();
        self
    }
}

fn by_start_time(assignments: &mut [VehicleAssignment]) {
    assignments.sort_by(|a, b| {
        a.start_time
            .cmp(&b.start_time)
            .then_with(|| a.id.cmp(&b.id))
    });
}

#[async_trait]
impl VehicleAssignmentRepository for InMemoryVehicleAssignmentRepository {
    async fn save(&self, assignment: &VehicleAssignment) -> Result<(), DomainError> {
        self.store.upsert(assignment.clone())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<VehicleAssignment>, DomainError> {
        self.store.get_live(id)
    }

    async fn find_by_contract(
        &self,
        contract_id: &str,
    ) -> Result<Vec<VehicleAssignment>, DomainError> {
        let mut assignments = self.store.live_where(|a| a.contract_id == contract_id)?;
        by_start_time(&mut assignments);
        Ok(assignments)
    }

    async fn find_active_by_driver(
        &self,
        driver_id: &str,
    ) -> Result<Vec<VehicleAssignment>, DomainError> {
        let mut assignments = self
            .store
            .live_where(|a| a.driver_id == driver_id && a.is_active())?;
        by_start_time(&mut assignments);
        Ok(assignments)
    }

    async fn find_active_by_driver_and_fleet(
        &self,
        driver_id: &str,
        fleet_id: &str,
    ) -> Result<Option<VehicleAssignment>, DomainError> {
        for assignment in self.find_active_by_driver(driver_id).await? {
            // A checked-out vehicle keeps its fleet after a soft delete
            let vehicle_fleet = self.vehicles.find_fleet_id(&assignment.vehicle_id).await?;
            if vehicle_fleet.as_deref() == Some(fleet_id) {
                return Ok(Some(assignment));
            }
        }
        Ok(None)
    }

    async fn soft_delete(&self, id: &str) -> Result<(), DomainError> {
        self.store.soft_delete(id, Utc::now())
    }

    async fn undelete(&self, id: &str) -> Result<(), DomainError> {
        self.store.undelete(id)
    }
}
