//! In-memory adapter for VehicleRepository

use async_trait::async_trait;
use chrono::Utc;

use super::store::MemoryStore;
use crate::domain::entities::Vehicle;
use crate::domain::ports::VehicleRepository;
use crate::error::DomainError;

#[derive(Default)]
pub struct InMemoryVehicleRepository {
    store: MemoryStore<Vehicle>,
}

impl InMemoryVehicleRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(test)]
impl InMemoryVehicleRepository {
    /// Pre-populate with a vehicle for testing
    pub fn with_vehicle(self, vehicle: Vehicle) -> Self {
        self.store.upsert(vehicle).unwrap();
        self
    }
}

#[async_trait]
impl VehicleRepository for InMemoryVehicleRepository {
    async fn save(&self, vehicle: &Vehicle) -> Result<(), DomainError> {
        self.store.upsert(vehicle.clone())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Vehicle>, DomainError> {
        self.store.get_live(id)
    }

    async fn find_by_fleet(&self, fleet_id: &str) -> Result<Vec<Vehicle>, DomainError> {
        let mut vehicles = self.store.live_where(|v| v.fleet_id == fleet_id)?;
        vehicles.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(vehicles)
    }

    async fn find_fleet_id(&self, id: &str) -> Result<Option<String>, DomainError> {
        Ok(self.store.get_any(id)?.map(|v| v.fleet_id))
    }

    async fn soft_delete(&self, id: &str) -> Result<(), DomainError> {
        self.store.soft_delete(id, Utc::now())
    }

    async fn undelete(&self, id: &str) -> Result<(), DomainError> {
        self.store.undelete(id)
    }
}
