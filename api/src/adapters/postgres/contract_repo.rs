//! PostgreSQL adapter for ContractRepository

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::prelude::DateTimeWithTimeZone;
use sea_orm::sea_query::{Expr, OnConflict};
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set};

use super::{db_err, not_deleted, to_utc};
use crate::domain::entities::Contract;
use crate::domain::ports::ContractRepository;
use crate::entity::contracts;
use crate::error::DomainError;

/// PostgreSQL implementation of ContractRepository
pub struct PostgresContractRepository {
    db: DatabaseConnection,
}

impl PostgresContractRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ContractRepository for PostgresContractRepository {
    async fn save(&self, contract: &Contract) -> Result<(), DomainError> {
        let model = contracts::ActiveModel {
            id: Set(contract.id.clone()),
            driver_id: Set(contract.driver_id.clone()),
            legal_entity_id: Set(contract.legal_entity_id.clone()),
            fleet_id: Set(contract.fleet_id.clone()),
            start_date: Set(contract.start_date),
            end_date: Set(contract.end_date),
            terminated_at: Set(contract.terminated_at.map(|t| t.fixed_offset())),
            terminated_by: Set(contract.terminated_by.clone()),
            deleted_at: Set(contract.deleted_at.map(|t| t.fixed_offset())),
        };

        contracts::Entity::insert(model)
            .on_conflict(
                OnConflict::column(contracts::Column::Id)
                    .update_columns([
                        contracts::Column::DriverId,
                        contracts::Column::LegalEntityId,
                        contracts::Column::FleetId,
                        contracts::Column::StartDate,
                        contracts::Column::EndDate,
                        contracts::Column::TerminatedAt,
                        contracts::Column::TerminatedBy,
                        contracts::Column::DeletedAt,
                    ])
                    .to_owned(),
            )
            .exec_without_returning(&self.db)
            .await
            .map_err(db_err)?;

        Ok(())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Contract>, DomainError> {
        let result = contracts::Entity::find_by_id(id.to_string())
            .filter(contracts::Column::DeletedAt.is_null())
            .one(&self.db)
            .await
            .map_err(db_err)?;

        Ok(result.map(|m| m.into()))
    }

    async fn find_by_driver(&self, driver_id: &str) -> Result<Vec<Contract>, DomainError> {
        let results = contracts::Entity::find()
            .filter(contracts::Column::DriverId.eq(driver_id))
            .filter(contracts::Column::DeletedAt.is_null())
            .order_by_asc(contracts::Column::StartDate)
            .order_by_asc(contracts::Column::Id)
            .all(&self.db)
            .await
            .map_err(db_err)?;

        Ok(results.into_iter().map(|m| m.into()).collect())
    }

    async fn soft_delete(&self, id: &str) -> Result<(), DomainError> {
        let result = contracts::Entity::update_many()
            .col_expr(
                contracts::Column::DeletedAt,
                Expr::value(Some(Utc::now().fixed_offset())),
            )
            .filter(contracts::Column::Id.eq(id))
            .filter(contracts::Column::DeletedAt.is_null())
            .exec(&self.db)
            .await
            .map_err(db_err)?;

        if result.rows_affected == 0 {
            let exists = contracts::Entity::find_by_id(id.to_string())
                .one(&self.db)
                .await
                .map_err(db_err)?
                .is_some();
            return Err(not_deleted("Contract", id, exists));
        }
        Ok(())
    }

    async fn undelete(&self, id: &str) -> Result<(), DomainError> {
        let result = contracts::Entity::update_many()
            .col_expr(
                contracts::Column::DeletedAt,
                Expr::value(Option::<DateTimeWithTimeZone>::None),
            )
            .filter(contracts::Column::Id.eq(id))
            .exec(&self.db)
            .await
            .map_err(db_err)?;

        if result.rows_affected == 0 {
            return Err(DomainError::NotFound(format!("Contract {} not found", id)));
        }
        Ok(())
    }
}

/// Convert SeaORM model to domain entity
impl From<contracts::Model> for Contract {
    fn from(model: contracts::Model) -> Self {
        Contract {
            id: model.id,
            driver_id: model.driver_id,
            legal_entity_id: model.legal_entity_id,
            fleet_id: model.fleet_id,
            start_date: model.start_date,
            end_date: model.end_date,
            terminated_at: model.terminated_at.map(to_utc),
            terminated_by: model.terminated_by,
            deleted_at: model.deleted_at.map(to_utc),
        }
    }
}
