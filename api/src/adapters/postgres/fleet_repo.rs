//! PostgreSQL adapter for FleetRepository

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::prelude::DateTimeWithTimeZone;
use sea_orm::sea_query::{Expr, OnConflict};
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set};

use super::{db_err, not_deleted, to_utc};
use crate::domain::entities::Fleet;
use crate::domain::ports::FleetRepository;
use crate::entity::fleets;
use crate::error::DomainError;

/// PostgreSQL implementation of FleetRepository
pub struct PostgresFleetRepository {
    db: DatabaseConnection,
}

impl PostgresFleetRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl FleetRepository for PostgresFleetRepository {
    async fn save(&self, fleet: &Fleet) -> Result<(), DomainError> {
        let model = fleets::ActiveModel {
            id: Set(fleet.id.clone()),
            legal_entity_id: Set(fleet.legal_entity_id.clone()),
            name: Set(fleet.name.clone()),
            deleted_at: Set(fleet.deleted_at.map(|t| t.fixed_offset())),
        };

        fleets::Entity::insert(model)
            .on_conflict(
                OnConflict::column(fleets::Column::Id)
                    .update_columns([
                        fleets::Column::LegalEntityId,
                        fleets::Column::Name,
                        fleets::Column::DeletedAt,
                    ])
                    .to_owned(),
            )
            .exec_without_returning(&self.db)
            .await
            .map_err(db_err)?;

        Ok(())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Fleet>, DomainError> {
        let result = fleets::Entity::find_by_id(id.to_string())
            .filter(fleets::Column::DeletedAt.is_null())
            .one(&self.db)
            .await
            .map_err(db_err)?;

        Ok(result.map(|m| m.into()))
    }

    async fn find_by_legal_entity(
        &self,
        legal_entity_id: &str,
    ) -> Result<Vec<Fleet>, DomainError> {
        let results = fleets::Entity::find()
            .filter(fleets::Column::LegalEntityId.eq(legal_entity_id))
            .filter(fleets::Column::DeletedAt.is_null())
            .order_by_asc(fleets::Column::Id)
            .all(&self.db)
            .await
            .map_err(db_err)?;

        Ok(results.into_iter().map(|m| m.into()).collect())
    }

    async fn soft_delete(&self, id: &str) -> Result<(), DomainError> {
        let result = fleets::Entity::update_many()
            .col_expr(
                fleets::Column::DeletedAt,
                Expr::value(Some(Utc::now().fixed_offset())),
            )
            .filter(fleets::Column::Id.eq(id))
            .filter(fleets::Column::DeletedAt.is_null())
            .exec(&self.db)
            .await
            .map_err(db_err)?;

        if result.rows_affected == 0 {
            let exists = fleets::Entity::find_by_id(id.to_string())
                .one(&self.db)
                .await
                .map_err(db_err)?
                .is_some();
            return Err(not_deleted("Fleet", id, exists));
        }
        Ok(())
    }

    async fn undelete(&self, id: &str) -> Result<(), DomainError> {
        let result = fleets::Entity::update_many()
            .col_expr(
                fleets::Column::DeletedAt,
                Expr::value(Option::<DateTimeWithTimeZone>::None),
            )
            .filter(fleets::Column::Id.eq(id))
            .exec(&self.db)
            .await
            .map_err(db_err)?;

        if result.rows_affected == 0 {
            return Err(DomainError::NotFound(format!("Fleet {} not found", id)));
        }
        Ok(())
    }
}

/// Convert SeaORM model to domain entity
impl From<fleets::Model> for Fleet {
    fn from(model: fleets::Model) -> Self {
        Fleet {
            id: model.id,
            legal_entity_id: model.legal_entity_id,
            name: model.name,
            deleted_at: model.deleted_at.map(to_utc),
        }
    }
}
