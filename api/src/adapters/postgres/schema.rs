//! Table definitions
//!
//! Idempotent DDL applied at startup when `RUN_MIGRATIONS` is set.

use sea_orm::{ConnectionTrait, DatabaseConnection};

use super::db_err;
use crate::error::DomainError;

const SCHEMA: &[&str] = &[
    r#"CREATE TABLE IF NOT EXISTS legal_entities (
        id TEXT PRIMARY KEY,
        name TEXT NOT NULL,
        tax_id TEXT NOT NULL,
        deleted_at TIMESTAMPTZ
    )"#,
    r#"CREATE TABLE IF NOT EXISTS fleets (
        id TEXT PRIMARY KEY,
        legal_entity_id TEXT NOT NULL,
        name TEXT NOT NULL,
        deleted_at TIMESTAMPTZ
    )"#,
    "CREATE INDEX IF NOT EXISTS idx_fleets_legal_entity_id ON fleets (legal_entity_id)",
    r#"CREATE TABLE IF NOT EXISTS vehicles (
        id TEXT PRIMARY KEY,
        fleet_id TEXT NOT NULL,
        make TEXT NOT NULL,
        model TEXT NOT NULL,
        year INTEGER NOT NULL,
        license_plate TEXT NOT NULL,
        deleted_at TIMESTAMPTZ
    )"#,
    "CREATE INDEX IF NOT EXISTS idx_vehicles_fleet_id ON vehicles (fleet_id)",
    r#"CREATE TABLE IF NOT EXISTS drivers (
        id TEXT PRIMARY KEY,
        first_name TEXT NOT NULL,
        last_name TEXT NOT NULL,
        license_number TEXT NOT NULL,
        deleted_at TIMESTAMPTZ
    )"#,
    r#"CREATE TABLE IF NOT EXISTS contracts (
        id TEXT PRIMARY KEY,
        driver_id TEXT NOT NULL,
        legal_entity_id TEXT NOT NULL,
        fleet_id TEXT NOT NULL,
        start_date DATE NOT NULL,
        end_date DATE NOT NULL,
        terminated_at TIMESTAMPTZ,
        terminated_by TEXT,
        deleted_at TIMESTAMPTZ
    )"#,
    "CREATE INDEX IF NOT EXISTS idx_contracts_driver_id ON contracts (driver_id)",
    r#"CREATE TABLE IF NOT EXISTS vehicle_assignments (
        id TEXT PRIMARY KEY,
        driver_id TEXT NOT NULL,
        vehicle_id TEXT NOT NULL,
        contract_id TEXT NOT NULL,
        start_time TIMESTAMPTZ NOT NULL,
        end_time TIMESTAMPTZ,
        deleted_at TIMESTAMPTZ
    )"#,
    "CREATE INDEX IF NOT EXISTS idx_vehicle_assignments_driver_id ON vehicle_assignments (driver_id)",
    "CREATE INDEX IF NOT EXISTS idx_vehicle_assignments_contract_id ON vehicle_assignments (contract_id)",
];

/// Create any missing tables and indexes
pub async fn ensure_schema(db: &DatabaseConnection) -> Result<(), DomainError> {
    for statement in SCHEMA {
        db.execute_unprepared(statement).await.map_err(db_err)?;
    }
    tracing::info!(statements = SCHEMA.len(), "Database schema ensured");
    Ok(())
}
