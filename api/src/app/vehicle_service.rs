//! Vehicle service

use std::sync::Arc;

use crate::app::validation::{next_id, require_id, require_text};
use crate::domain::entities::{Vehicle, MAX_VEHICLE_YEAR, MIN_VEHICLE_YEAR};
use crate::domain::ports::{FleetRepository, IdGenerator, VehicleRepository};
use crate::error::DomainError;

/// Data needed to register a vehicle
#[derive(Debug, Clone)]
pub struct NewVehicle {
    pub fleet_id: String,
    pub make: String,
    pub model: String,
    pub year: i32,
    pub license_plate: String,
}

/// Service for managing the vehicles of a fleet
pub struct VehicleService<FR, VR>
where
    FR: FleetRepository,
    VR: VehicleRepository,
{
    fleets: Arc<FR>,
    vehicles: Arc<VR>,
    ids: IdGenerator,
}

impl<FR, VR> VehicleService<FR, VR>
where
    FR: FleetRepository,
    VR: VehicleRepository,
{
    pub fn new(fleets: Arc<FR>, vehicles: Arc<VR>, ids: IdGenerator) -> Self {
        Self {
            fleets,
            vehicles,
            ids,
        }
    }

    /// Register a vehicle in an existing fleet
    ///
    /// Make and model are required; the license plate is trimmed but may be
    /// empty (unregistered vehicles). The year must lie in 1900..=2100.
    pub async fn create(&self, new_vehicle: NewVehicle) -> Result<Vehicle, DomainError> {
        require_id(&new_vehicle.fleet_id, "fleet_id")?;
        let make = require_text(&new_vehicle.make, "make")?;
        let model = require_text(&new_vehicle.model, "model")?;
        if !Vehicle::year_in_range(new_vehicle.year) {
            return Err(DomainError::InvalidInput(format!(
                "year must be between {} and {}",
                MIN_VEHICLE_YEAR, MAX_VEHICLE_YEAR
            )));
        }

        if self.fleets.find_by_id(&new_vehicle.fleet_id).await?.is_none() {
            return Err(DomainError::NotFound(format!(
                "Fleet {} not found",
                new_vehicle.fleet_id
            )));
        }

        let vehicle = Vehicle {
            id: next_id(&self.ids)?,
            fleet_id: new_vehicle.fleet_id,
            make,
            model,
            year: new_vehicle.year,
            license_plate: new_vehicle.license_plate.trim().to_string(),
            deleted_at: None,
        };

        if let Err(e) = self.vehicles.save(&vehicle).await {
            tracing::error!(id = %vehicle.id, error = %e, "Failed to save vehicle");
            return Err(e);
        }
        tracing::info!(id = %vehicle.id, fleet_id = %vehicle.fleet_id, "Created vehicle");

        Ok(vehicle)
    }

    pub async fn get(&self, id: &str) -> Result<Vehicle, DomainError> {
        require_id(id, "id")?;
        self.vehicles
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::NotFound(format!("Vehicle {} not found", id)))
    }

    pub async fn list_by_fleet(&self, fleet_id: &str) -> Result<Vec<Vehicle>, DomainError> {
        require_id(fleet_id, "fleet_id")?;
        self.vehicles.find_by_fleet(fleet_id).await
    }

    pub async fn delete(&self, id: &str) -> Result<(), DomainError> {
        require_id(id, "id")?;
        self.vehicles.soft_delete(id).await?;
        tracing::info!(id = %id, "Deleted vehicle");
        Ok(())
    }

    pub async fn undelete(&self, id: &str) -> Result<(), DomainError> {
        require_id(id, "id")?;
        self.vehicles.undelete(id).await?;
        tracing::info!(id = %id, "Undeleted vehicle");
        Ok(())
    }
}
