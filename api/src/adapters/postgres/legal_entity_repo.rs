//! PostgreSQL adapter for LegalEntityRepository

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::prelude::DateTimeWithTimeZone;
use sea_orm::sea_query::{Expr, OnConflict};
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set};

use super::{db_err, not_deleted, to_utc};
use crate::domain::entities::LegalEntity;
use crate::domain::ports::LegalEntityRepository;
use crate::entity::legal_entities;
use crate::error::DomainError;

/// PostgreSQL implementation of LegalEntityRepository
pub struct PostgresLegalEntityRepository {
    db: DatabaseConnection,
}

impl PostgresLegalEntityRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl LegalEntityRepository for PostgresLegalEntityRepository {
    async fn save(&self, entity: &LegalEntity) -> Result<(), DomainError> {
        let model = legal_entities::ActiveModel {
            id: Set(entity.id.clone()),
            name: Set(entity.name.clone()),
            tax_id: Set(entity.tax_id.clone()),
            deleted_at: Set(entity.deleted_at.map(|t| t.fixed_offset())),
        };

        legal_entities::Entity::insert(model)
            .on_conflict(
                OnConflict::column(legal_entities::Column::Id)
                    .update_columns([
                        legal_entities::Column::Name,
                        legal_entities::Column::TaxId,
                        legal_entities::Column::DeletedAt,
                    ])
                    .to_owned(),
            )
            .exec_without_returning(&self.db)
            .await
            .map_err(db_err)?;

        Ok(())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<LegalEntity>, DomainError> {
        let result = legal_entities::Entity::find_by_id(id.to_string())
            .filter(legal_entities::Column::DeletedAt.is_null())
            .one(&self.db)
            .await
            .map_err(db_err)?;

        Ok(result.map(|m| m.into()))
    }

    async fn find_all(&self) -> Result<Vec<LegalEntity>, DomainError> {
        let results = legal_entities::Entity::find()
            .filter(legal_entities::Column::DeletedAt.is_null())
            .order_by_asc(legal_entities::Column::Id)
            .all(&self.db)
            .await
            .map_err(db_err)?;

        Ok(results.into_iter().map(|m| m.into()).collect())
    }

    async fn soft_delete(&self, id: &str) -> Result<(), DomainError> {
        let result = legal_entities::Entity::update_many()
            .col_expr(
                legal_entities::Column::DeletedAt,
                Expr::value(Some(Utc::now().fixed_offset())),
            )
            .filter(legal_entities::Column::Id.eq(id))
            .filter(legal_entities::Column::DeletedAt.is_null())
            .exec(&self.db)
            .await
            .map_err(db_err)?;

        if result.rows_affected == 0 {
            let exists = legal_entities::Entity::find_by_id(id.to_string())
                .one(&self.db)
                .await
                .map_err(db_err)?
                .is_some();
            return Err(not_deleted("Legal entity", id, exists));
        }
        Ok(())
    }

    async fn undelete(&self, id: &str) -> Result<(), DomainError> {
        let result = legal_entities::Entity::update_many()
            .col_expr(
                legal_entities::Column::DeletedAt,
                Expr::value(Option::<DateTimeWithTimeZone>::None),
            )
            .filter(legal_entities::Column::Id.eq(id))
            .exec(&self.db)
            .await
            .map_err(db_err)?;

        if result.rows_affected == 0 {
            return Err(DomainError::NotFound(format!(
                "Legal entity {} not found",
                id
            )));
        }
        Ok(())
    }
}

/// Convert SeaORM model to domain entity
impl From<legal_entities::Model> for LegalEntity {
    fn from(model: legal_entities::Model) -> Self {
        LegalEntity {
            id: model.id,
            name: model.name,
            tax_id: model.tax_id,
            deleted_at: model.deleted_at.map(to_utc),
        }
    }
}
