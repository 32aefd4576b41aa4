//! PostgreSQL adapter for VehicleRepository

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::prelude::DateTimeWithTimeZone;
use sea_orm::sea_query::{Expr, OnConflict};
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set};

use super::{db_err, not_deleted, to_utc};
use crate::domain::entities::Vehicle;
use crate::domain::ports::VehicleRepository;
use crate::entity::vehicles;
use crate::error::DomainError;

/// PostgreSQL implementation of VehicleRepository
pub struct PostgresVehicleRepository {
    db: DatabaseConnection,
}

impl PostgresVehicleRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl VehicleRepository for PostgresVehicleRepository {
    async fn save(&self, vehicle: &Vehicle) -> Result<(), DomainError> {
        let model = vehicles::ActiveModel {
            id: Set(vehicle.id.clone()),
            fleet_id: Set(vehicle.fleet_id.clone()),
            make: Set(vehicle.make.clone()),
            model: Set(vehicle.model.clone()),
            year: Set(vehicle.year),
            license_plate: Set(vehicle.license_plate.clone()),
            deleted_at: Set(vehicle.deleted_at.map(|t| t.fixed_offset())),
        };

        vehicles::Entity::insert(model)
            .on_conflict(
                OnConflict::column(vehicles::Column::Id)
                    .update_columns([
                        vehicles::Column::FleetId,
                        vehicles::Column::Make,
                        vehicles::Column::Model,
                        vehicles::Column::Year,
                        vehicles::Column::LicensePlate,
                        vehicles::Column::DeletedAt,
                    ])
                    .to_owned(),
            )
            .exec_without_returning(&self.db)
            .await
            .map_err(db_err)?;

        Ok(())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Vehicle>, DomainError> {
        let result = vehicles::Entity::find_by_id(id.to_string())
            .filter(vehicles::Column::DeletedAt.is_null())
            .one(&self.db)
            .await
            .map_err(db_err)?;

        Ok(result.map(|m| m.into()))
    }

    async fn find_fleet_id(&self, id: &str) -> Result<Option<String>, DomainError> {
        let result = vehicles::Entity::find_by_id(id.to_string())
            .one(&self.db)
            .await
            .map_err(db_err)?;

        Ok(result.map(|m| m.fleet_id))
    }

    async fn find_by_fleet(&self, fleet_id: &str) -> Result<Vec<Vehicle>, DomainError> {
        let results = vehicles::Entity::find()
            .filter(vehicles::Column::FleetId.eq(fleet_id))
            .filter(vehicles::Column::DeletedAt.is_null())
            .order_by_asc(vehicles::Column::Id)
            .all(&self.db)
            .await
            .map_err(db_err)?;

        Ok(results.into_iter().map(|m| m.into()).collect())
    }

    async fn soft_delete(&self, id: &str) -> Result<(), DomainError> {
        let result = vehicles::Entity::update_many()
            .col_expr(
                vehicles::Column::DeletedAt,
                Expr::value(Some(Utc::now().fixed_offset())),
            )
            .filter(vehicles::Column::Id.eq(id))
            .filter(vehicles::Column::DeletedAt.is_null())
            .exec(&self.db)
            .await
            .map_err(db_err)?;

        if result.rows_affected == 0 {
            let exists = vehicles::Entity::find_by_id(id.to_string())
                .one(&self.db)
                .await
                .map_err(db_err)?
                .is_some();
            return Err(not_deleted("Vehicle", id, exists));
        }
        Ok(())
    }

    async fn undelete(&self, id: &str) -> Result<(), DomainError> {
        let result = vehicles::Entity::update_many()
            .col_expr(
                vehicles::Column::DeletedAt,
                Expr::value(Option::<DateTimeWithTimeZone>::None),
            )
            .filter(vehicles::Column::Id.eq(id))
            .exec(&self.db)
            .await
            .map_err(db_err)?;

        if result.rows_affected == 0 {
            return Err(DomainError::NotFound(format!("Vehicle {} not found", id)));
        }
        Ok(())
    }
}

/// Convert SeaORM model to domain entity
impl From<vehicles::Model> for Vehicle {
    fn from(model: vehicles::Model) -> Self {
        Vehicle {
            id: model.id,
            fleet_id: model.fleet_id,
            make: model.make,
            model: model.model,
            year: model.year,
            license_plate: model.license_plate,
            deleted_at: model.deleted_at.map(to_utc),
        }
    }
}
