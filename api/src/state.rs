//! Application state
//!
//! `AppState` holds one service per aggregate. It is generic over a
//! `Backend`, which names the concrete repository and validator types, so
//! the same router runs against PostgreSQL, the in-memory store, or test
//! doubles.

use std::marker::PhantomData;
use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::adapters::{
    InMemoryContractRepository, InMemoryDriverRepository, InMemoryFleetRepository,
    InMemoryLegalEntityRepository, InMemoryVehicleAssignmentRepository,
    InMemoryVehicleRepository, LicenseValidatorClient, PostgresContractRepository,
    PostgresDriverRepository, PostgresFleetRepository, PostgresLegalEntityRepository,
    PostgresVehicleAssignmentRepository, PostgresVehicleRepository,
};
use crate::app::{
    ContractService, DriverService, FleetService, LegalEntityService, VehicleAssignmentService,
    VehicleService,
};
use crate::domain::ports::{
    Clock, ContractRepository, DriverRepository, FleetRepository, IdGenerator,
    LegalEntityRepository, LicenseValidator, VehicleAssignmentRepository, VehicleRepository,
};

/// Set of adapter types the services run on
pub trait Backend: Send + Sync + 'static {
    type LegalEntities: LegalEntityRepository + 'static;
    type Fleets: FleetRepository + 'static;
    type Vehicles: VehicleRepository + 'static;
    type Drivers: DriverRepository + 'static;
    type Contracts: ContractRepository + 'static;
    type Assignments: VehicleAssignmentRepository + 'static;
    type Validator: LicenseValidator + 'static;
}

/// PostgreSQL repositories with the HTTP license client
pub struct Postgres;

impl Backend for Postgres {
    type LegalEntities = PostgresLegalEntityRepository;
    type Fleets = PostgresFleetRepository;
    type Vehicles = PostgresVehicleRepository;
    type Drivers = PostgresDriverRepository;
    type Contracts = PostgresContractRepository;
    type Assignments = PostgresVehicleAssignmentRepository;
    type Validator = LicenseValidatorClient;
}

/// In-memory repositories with a pluggable license validator
pub struct InMemory<V = LicenseValidatorClient>(PhantomData<V>);

impl<V: LicenseValidator + 'static> Backend for InMemory<V> {
    type LegalEntities = InMemoryLegalEntityRepository;
    type Fleets = InMemoryFleetRepository;
    type Vehicles = InMemoryVehicleRepository;
    type Drivers = InMemoryDriverRepository;
    type Contracts = InMemoryContractRepository;
    type Assignments = InMemoryVehicleAssignmentRepository;
    type Validator = V;
}

/// Concrete adapters for one backend
pub struct Repositories<B: Backend> {
    pub legal_entities: Arc<B::LegalEntities>,
    pub fleets: Arc<B::Fleets>,
    pub vehicles: Arc<B::Vehicles>,
    pub drivers: Arc<B::Drivers>,
    pub contracts: Arc<B::Contracts>,
    pub assignments: Arc<B::Assignments>,
    pub validator: Arc<B::Validator>,
}

impl Repositories<Postgres> {
    pub fn postgres(db: DatabaseConnection, validator: LicenseValidatorClient) -> Self {
        Self {
            legal_entities: Arc::new(PostgresLegalEntityRepository::new(db.clone())),
            fleets: Arc::new(PostgresFleetRepository::new(db.clone())),
            vehicles: Arc::new(PostgresVehicleRepository::new(db.clone())),
            drivers: Arc::new(PostgresDriverRepository::new(db.clone())),
            contracts: Arc::new(PostgresContractRepository::new(db.clone())),
            assignments: Arc::new(PostgresVehicleAssignmentRepository::new(db)),
            validator: Arc::new(validator),
        }
    }
}

impl<V: LicenseValidator + 'static> Repositories<InMemory<V>> {
    pub fn in_memory(validator: V) -> Self {
        let vehicles = Arc::new(InMemoryVehicleRepository::new());
        Self {
            legal_entities: Arc::new(InMemoryLegalEntityRepository::new()),
            fleets: Arc::new(InMemoryFleetRepository::new()),
            assignments: Arc::new(InMemoryVehicleAssignmentRepository::new(vehicles.clone())),
            vehicles,
            drivers: Arc::new(InMemoryDriverRepository::new()),
            contracts: Arc::new(InMemoryContractRepository::new()),
            validator: Arc::new(validator),
        }
    }
}

/// Application state shared across all handlers
pub struct AppState<B: Backend> {
    pub legal_entity_service: Arc<LegalEntityService<B::LegalEntities>>,
    pub fleet_service: Arc<FleetService<B::LegalEntities, B::Fleets>>,
    pub vehicle_service: Arc<VehicleService<B::Fleets, B::Vehicles>>,
    pub driver_service:
        Arc<DriverService<B::Drivers, B::Contracts, B::Assignments, B::Validator>>,
    pub contract_service:
        Arc<ContractService<B::Drivers, B::LegalEntities, B::Fleets, B::Contracts>>,
    pub assignment_service:
        Arc<VehicleAssignmentService<B::Contracts, B::Vehicles, B::Assignments>>,
}

// Derived Clone would require `B: Clone`
impl<B: Backend> Clone for AppState<B> {
    fn clone(&self) -> Self {
        Self {
            legal_entity_service: self.legal_entity_service.clone(),
            fleet_service: self.fleet_service.clone(),
            vehicle_service: self.vehicle_service.clone(),
            driver_service: self.driver_service.clone(),
            contract_service: self.contract_service.clone(),
            assignment_service: self.assignment_service.clone(),
        }
    }
}

impl<B: Backend> AppState<B> {
    /// Wire every service onto the given adapters
    pub fn new(repos: Repositories<B>, ids: IdGenerator, clock: Clock) -> Self {
        Self {
            legal_entity_service: Arc::new(LegalEntityService::new(
                repos.legal_entities.clone(),
                ids.clone(),
            )),
            fleet_service: Arc::new(FleetService::new(
                repos.legal_entities.clone(),
                repos.fleets.clone(),
                ids.clone(),
            )),
            vehicle_service: Arc::new(VehicleService::new(
                repos.fleets.clone(),
                repos.vehicles.clone(),
                ids.clone(),
            )),
            driver_service: Arc::new(DriverService::new(
                repos.drivers.clone(),
                repos.contracts.clone(),
                repos.assignments.clone(),
                repos.validator,
                ids.clone(),
                clock.clone(),
            )),
            contract_service: Arc::new(ContractService::new(
                repos.drivers,
                repos.legal_entities,
                repos.fleets,
                repos.contracts.clone(),
                ids.clone(),
                clock.clone(),
            )),
            assignment_service: Arc::new(VehicleAssignmentService::new(
                repos.contracts,
                repos.vehicles,
                repos.assignments,
                ids,
                clock,
            )),
        }
    }
}
