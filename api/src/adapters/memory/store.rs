//! Lock-guarded record map shared by the in-memory repositories
//!
//! Reads hand out clones, so callers never hold a reference into the map.
//! Guards are dropped before any `.await` in the repositories.

use std::collections::HashMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::{DateTime, Utc};

use crate::domain::entities::{Contract, Driver, Fleet, LegalEntity, Vehicle, VehicleAssignment};
use crate::error::DomainError;

/// A soft-deletable record keyed by its id
pub trait Record: Clone + Send + Sync {
    /// Human-readable kind used in error messages
    const KIND: &'static str;

    fn id(&self) -> &str;

    fn deleted_at(&self) -> Option<DateTime<Utc>>;

    fn set_deleted_at(&mut self, deleted_at: Option<DateTime<Utc>>);
}

macro_rules! impl_record {
    ($ty:ty, $kind:literal) => {
        impl Record for $ty {
            const KIND: &'static str = $kind;

            fn id(&self) -> &str {
                &self.id
            }

            fn deleted_at(&self) -> Option<DateTime<Utc>> {
                self.deleted_at
            }

            fn set_deleted_at(&mut self, deleted_at: Option<DateTime<Utc>>) {
                self.deleted_at = deleted_at;
            }
        }
    };
}

impl_record!(LegalEntity, "Legal entity");
impl_record!(Fleet, "Fleet");
impl_record!(Vehicle, "Vehicle");
impl_record!(Driver, "Driver");
impl_record!(Contract, "Contract");
impl_record!(VehicleAssignment, "Vehicle assignment");

pub struct MemoryStore<T: Record> {
    records: RwLock<HashMap<String, T>>,
}

impl<T: Record> Default for MemoryStore<T> {
    fn default() -> Self {
        Self {
            records: RwLock::new(HashMap::new()),
        }
    }
}

impl<T: Record> MemoryStore<T> {
    fn read(&self) -> Result<RwLockReadGuard<'_, HashMap<String, T>>, DomainError> {
        self.records
            .read()
            .map_err(|_| DomainError::Internal(format!("{} store lock poisoned", T::KIND)))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, HashMap<String, T>>, DomainError> {
        self.records
            .write()
            .map_err(|_| DomainError::Internal(format!("{} store lock poisoned", T::KIND)))
    }

    pub fn upsert(&self, record: T) -> Result<(), DomainError> {
        let mut records = self.write()?;
        records.insert(record.id().to_string(), record);
        Ok(())
    }

    /// Clone of the record unless it is absent or soft-deleted
    pub fn get_live(&self, id: &str) -> Result<Option<T>, DomainError> {
        let records = self.read()?;
        Ok(records
            .get(id)
            .filter(|r| r.deleted_at().is_none())
            .cloned())
    }

    /// Clone of the record, tombstoned or not
    pub fn get_any(&self, id: &str) -> Result<Option<T>, DomainError> {
        let records = self.read()?;
        Ok(records.get(id).cloned())
    }

    /// Live records matching `filter`, in no particular order
    pub fn live_where<F>(&self, filter: F) -> Result<Vec<T>, DomainError>
    where
        F: Fn(&T) -> bool,
    {
        let records = self.read()?;
        Ok(records
            .values()
            .filter(|r| r.deleted_at().is_none() && filter(r))
            .cloned()
            .collect())
    }

    pub fn soft_delete(&self, id: &str, now: DateTime<Utc>) -> Result<(), DomainError> {
        let mut records = self.write()?;
        let record = records
            .get_mut(id)
            .ok_or_else(|| DomainError::NotFound(format!("{} {} not found", T::KIND, id)))?;
        if record.deleted_at().is_some() {
            return Err(DomainError::AlreadyDeleted(format!(
                "{} {} is already deleted",
                T::KIND,
                id
            )));
        }
        record.set_deleted_at(Some(now));
        Ok(())
    }

    pub fn undelete(&self, id: &str) -> Result<(), DomainError> {
        let mut records = self.write()?;
        let record = records
            .get_mut(id)
            .ok_or_else(|| DomainError::NotFound(format!("{} {} not found", T::KIND, id)))?;
        record.set_deleted_at(None);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::test_legal_entity;

    #[test]
    fn soft_deleted_records_are_hidden() {
        let store = MemoryStore::<LegalEntity>::default();
        let entity = test_legal_entity("le-1");
        store.upsert(entity.clone()).unwrap();

        store.soft_delete("le-1", Utc::now()).unwrap();

        assert!(store.get_live("le-1").unwrap().is_none());
        assert!(store.live_where(|_| true).unwrap().is_empty());
    }

    #[test]
    fn double_soft_delete_is_rejected() {
        let store = MemoryStore::<LegalEntity>::default();
        store.upsert(test_legal_entity("le-1")).unwrap();

        store.soft_delete("le-1", Utc::now()).unwrap();
        let err = store.soft_delete("le-1", Utc::now()).unwrap_err();

        assert!(matches!(err, DomainError::AlreadyDeleted(_)));
    }

    #[test]
    fn soft_delete_unknown_is_not_found() {
        let store = MemoryStore::<LegalEntity>::default();
        let err = store.soft_delete("missing", Utc::now()).unwrap_err();
        assert!(matches!(err, DomainError::NotFound(_)));
    }

    #[test]
    fn undelete_restores_and_is_noop_when_live() {
        let store = MemoryStore::<LegalEntity>::default();
        let entity = test_legal_entity("le-1");
        store.upsert(entity.clone()).unwrap();

        store.undelete("le-1").unwrap();
        assert_eq!(store.get_live("le-1").unwrap(), Some(entity.clone()));

        store.soft_delete("le-1", Utc::now()).unwrap();
        store.undelete("le-1").unwrap();
        assert_eq!(store.get_live("le-1").unwrap(), Some(entity));
    }

    #[test]
    fn undelete_unknown_is_not_found() {
        let store = MemoryStore::<LegalEntity>::default();
        let err = store.undelete("missing").unwrap_err();
        assert!(matches!(err, DomainError::NotFound(_)));
    }

    #[test]
    fn reads_return_copies() {
        let store = MemoryStore::<LegalEntity>::default();
        store.upsert(test_legal_entity("le-1")).unwrap();

        let mut copy = store.get_live("le-1").unwrap().unwrap();
        copy.name = "Changed".to_string();

        assert_ne!(store.get_live("le-1").unwrap().unwrap().name, "Changed");
    }
}
