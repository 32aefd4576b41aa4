//! PostgreSQL adapter for VehicleAssignmentRepository
//!
//! The fleet of an assignment is the fleet of its vehicle, so fleet-scoped
//! queries join `vehicles`.

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::prelude::DateTimeWithTimeZone;
use sea_orm::sea_query::{Expr, OnConflict};
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set};

use super::{db_err, not_deleted, to_utc};
use crate::domain::entities::VehicleAssignment;
use crate::domain::ports::VehicleAssignmentRepository;
use crate::entity::{vehicle_assignments, vehicles};
use crate::error::DomainError;

/// PostgreSQL implementation of VehicleAssignmentRepository
pub struct PostgresVehicleAssignmentRepository {
    db: DatabaseConnection,
}

impl PostgresVehicleAssignmentRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl VehicleAssignmentRepository for PostgresVehicleAssignmentRepository {
    async fn save(&self, assignment: &VehicleAssignment) -> Result<(), DomainError> {
        let model = vehicle_assignments::ActiveModel {
            id: Set(assignment.id.clone()),
            driver_id: Set(assignment.driver_id.clone()),
            vehicle_id: Set(assignment.vehicle_id.clone()),
            contract_id: Set(assignment.contract_id.clone()),
            start_time: Set(assignment.start_time.fixed_offset()),
            end_time: Set(assignment.end_time.map(|t| t.fixed_offset())),
            deleted_at: Set(assignment.deleted_at.map(|t| t.fixed_offset())),
        };

        vehicle_assignments::Entity::insert(model)
            .on_conflict(
                OnConflict::column(vehicle_assignments::Column::Id)
                    .update_columns([
                        vehicle_assignments::Column::DriverId,
                        vehicle_assignments::Column::VehicleId,
                        vehicle_assignments::Column::ContractId,
                        vehicle_assignments::Column::StartTime,
                        vehicle_assignments::Column::EndTime,
                        vehicle_assignments::Column::DeletedAt,
                    ])
                    .to_owned(),
            )
            .exec_without_returning(&self.db)
            .await
            .map_err(db_err)?;

        Ok(())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<VehicleAssignment>, DomainError> {
        let result = vehicle_assignments::Entity::find_by_id(id.to_string())
            .filter(vehicle_assignments::Column::DeletedAt.is_null())
            .one(&self.db)
            .await
            .map_err(db_err)?;

        Ok(result.map(|m| m.into()))
    }

    async fn find_by_contract(
        &self,
        contract_id: &str,
    ) -> Result<Vec<VehicleAssignment>, DomainError> {
        let results = vehicle_assignments::Entity::find()
            .filter(vehicle_assignments::Column::ContractId.eq(contract_id))
            .filter(vehicle_assignments::Column::DeletedAt.is_null())
            .order_by_asc(vehicle_assignments::Column::StartTime)
            .order_by_asc(vehicle_assignments::Column::Id)
            .all(&self.db)
            .await
            .map_err(db_err)?;

        Ok(results.into_iter().map(|m| m.into()).collect())
    }

    async fn find_active_by_driver(
        &self,
        driver_id: &str,
    ) -> Result<Vec<VehicleAssignment>, DomainError> {
        let results = vehicle_assignments::Entity::find()
            .filter(vehicle_assignments::Column::DriverId.eq(driver_id))
            .filter(vehicle_assignments::Column::EndTime.is_null())
            .filter(vehicle_assignments::Column::DeletedAt.is_null())
            .order_by_asc(vehicle_assignments::Column::StartTime)
            .order_by_asc(vehicle_assignments::Column::Id)
            .all(&self.db)
            .await
            .map_err(db_err)?;

        Ok(results.into_iter().map(|m| m.into()).collect())
    }

    async fn find_active_by_driver_and_fleet(
        &self,
        driver_id: &str,
        fleet_id: &str,
    ) -> Result<Option<VehicleAssignment>, DomainError> {
        let result = vehicle_assignments::Entity::find()
            .inner_join(vehicles::Entity)
            .filter(vehicle_assignments::Column::DriverId.eq(driver_id))
            .filter(vehicle_assignments::Column::EndTime.is_null())
            .filter(vehicle_assignments::Column::DeletedAt.is_null())
            .filter(vehicles::Column::FleetId.eq(fleet_id))
            .order_by_asc(vehicle_assignments::Column::StartTime)
            .one(&self.db)
            .await
            .map_err(db_err)?;

        Ok(result.map(|m| m.into()))
    }

    async fn soft_delete(&self, id: &str) -> Result<(), DomainError> {
        let result = vehicle_assignments::Entity::update_many()
            .col_expr(
                vehicle_assignments::Column::DeletedAt,
                Expr::value(Some(Utc::now().fixed_offset())),
            )
            .filter(vehicle_assignments::Column::Id.eq(id))
            .filter(vehicle_assignments::Column::DeletedAt.is_null())
            .exec(&self.db)
            .await
            .map_err(db_err)?;

        if result.rows_affected == 0 {
            let exists = vehicle_assignments::Entity::find_by_id(id.to_string())
                .one(&self.db)
                .await
                .map_err(db_err)?
                .is_some();
            return Err(not_deleted("Vehicle assignment", id, exists));
        }
        Ok(())
    }

    async fn undelete(&self, id: &str) -> Result<(), DomainError> {
        let result = vehicle_assignments::Entity::update_many()
            .col_expr(
                vehicle_assignments::Column::DeletedAt,
                Expr::value(Option::<DateTimeWithTimeZone>::None),
            )
            .filter(vehicle_assignments::Column::Id.eq(id))
            .exec(&self.db)
            .await
            .map_err(db_err)?;

        if result.rows_affected == 0 {
            return Err(DomainError::NotFound(format!(
                "Vehicle assignment {} not found",
                id
            )));
        }
        Ok(())
    }
}

/// Convert SeaORM model to domain entity
impl From<vehicle_assignments::Model> for VehicleAssignment {
    fn from(model: vehicle_assignments::Model) -> Self {
        VehicleAssignment {
            id: model.id,
            driver_id: model.driver_id,
            vehicle_id: model.vehicle_id,
            contract_id: model.contract_id,
            start_time: to_utc(model.start_time),
            end_time: model.end_time.map(to_utc),
            deleted_at: model.deleted_at.map(to_utc),
        }
    }
}
