//! PostgreSQL adapter for DriverRepository

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::prelude::DateTimeWithTimeZone;
use sea_orm::sea_query::{Expr, OnConflict};
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set};

use super::{db_err, not_deleted, to_utc};
use crate::domain::entities::Driver;
use crate::domain::ports::DriverRepository;
use crate::entity::drivers;
use crate::error::DomainError;

/// PostgreSQL implementation of DriverRepository
pub struct PostgresDriverRepository {
    db: DatabaseConnection,
}

impl PostgresDriverRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl DriverRepository for PostgresDriverRepository {
    async fn save(&self, driver: &Driver) -> Result<(), DomainError> {
        let model = drivers::ActiveModel {
            id: Set(driver.id.clone()),
            first_name: Set(driver.first_name.clone()),
            last_name: Set(driver.last_name.clone()),
            license_number: Set(driver.license_number.clone()),
            deleted_at: Set(driver.deleted_at.map(|t| t.fixed_offset())),
        };

        drivers::Entity::insert(model)
            .on_conflict(
                OnConflict::column(drivers::Column::Id)
                    .update_columns([
                        drivers::Column::FirstName,
                        drivers::Column::LastName,
                        drivers::Column::LicenseNumber,
                        drivers::Column::DeletedAt,
                    ])
                    .to_owned(),
            )
            .exec_without_returning(&self.db)
            .await
            .map_err(db_err)?;

        Ok(())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Driver>, DomainError> {
        let result = drivers::Entity::find_by_id(id.to_string())
            .filter(drivers::Column::DeletedAt.is_null())
            .one(&self.db)
            .await
            .map_err(db_err)?;

        Ok(result.map(|m| m.into()))
    }

    async fn find_all(&self) -> Result<Vec<Driver>, DomainError> {
        let results = drivers::Entity::find()
            .filter(drivers::Column::DeletedAt.is_null())
            .order_by_asc(drivers::Column::Id)
            .all(&self.db)
            .await
            .map_err(db_err)?;

        Ok(results.into_iter().map(|m| m.into()).collect())
    }

    async fn soft_delete(&self, id: &str) -> Result<(), DomainError> {
        let result = drivers::Entity::update_many()
            .col_expr(
                drivers::Column::DeletedAt,
                Expr::value(Some(Utc::now().fixed_offset())),
            )
            .filter(drivers::Column::Id.eq(id))
            .filter(drivers::Column::DeletedAt.is_null())
            .exec(&self.db)
            .await
            .map_err(db_err)?;

        if result.rows_affected == 0 {
            let exists = drivers::Entity::find_by_id(id.to_string())
                .one(&self.db)
                .await
                .map_err(db_err)?
                .is_some();
            return Err(not_deleted("Driver", id, exists));
        }
        Ok(())
    }

    async fn undelete(&self, id: &str) -> Result<(), DomainError> {
        let result = drivers::Entity::update_many()
            .col_expr(
                drivers::Column::DeletedAt,
                Expr::value(Option::<DateTimeWithTimeZone>::None),
            )
            .filter(drivers::Column::Id.eq(id))
            .exec(&self.db)
            .await
            .map_err(db_err)?;

        if result.rows_affected == 0 {
            return Err(DomainError::NotFound(format!("Driver {} not found", id)));
        }
        Ok(())
    }
}

/// Convert SeaORM model to domain entity
impl From<drivers::Model> for Driver {
    fn from(model: drivers::Model) -> Self {
        Driver {
            id: model.id,
            first_name: model.first_name,
            last_name: model.last_name,
            license_number: model.license_number,
            deleted_at: model.deleted_at.map(to_utc),
        }
    }
}
