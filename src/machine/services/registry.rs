//! Service layer for machine registration and lookup.
//!
//! Provides [`MachineRegistryService`] which validates request input and
//! coordinates the registry repository.

use crate::error::ErrorKind;
use crate::machine::{
    domain::{Capacity, Machine, MachineDomainError, MachineId},
    ports::{MachineRepository, MachineRepositoryError},
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use thiserror::Error;

/// Request payload for registering a machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegisterMachineRequest {
    id: Option<u32>,
    capacity_kg: i64,
}

impl RegisterMachineRequest {
    /// Creates a request that lets the registry allocate the identifier.
    #[must_use]
    pub const fn new(capacity_kg: i64) -> Self {
        Self {
            id: None,
            capacity_kg,
        }
    }

    /// Sets a caller-assigned identifier.
    #[must_use]
    pub const fn with_id(mut self, id: u32) -> Self {
        self.id = Some(id);
        self
    }
}

/// Sample machine loaded into an empty registry at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct MachineSeed {
    /// Machine identifier.
    pub id: u32,
    /// Capacity in kilograms.
    pub capacity_kg: i64,
}

/// Service-level errors for registry operations.
#[derive(Debug, Error)]
pub enum MachineRegistryError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] MachineDomainError),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] MachineRepositoryError),
}

impl MachineRegistryError {
    /// Classifies the error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Domain(_) => ErrorKind::InvalidInput,
            Self::Repository(err) => err.kind(),
        }
    }
}

/// Result type for registry service operations.
pub type MachineRegistryResult<T> = Result<T, MachineRegistryError>;

/// Machine registration and lookup service.
pub struct MachineRegistryService<R>
where
    R: MachineRepository + ?Sized,
{
    repository: Arc<R>,
}

impl<R> Clone for MachineRegistryService<R>
where
    R: MachineRepository + ?Sized,
{
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

impl<R> MachineRegistryService<R>
where
    R: MachineRepository + ?Sized,
{
    /// Creates a new registry service.
    #[must_use]
    pub const fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Registers a machine.
    ///
    /// Without an explicit id the next free identifier is allocated.
    ///
    /// # Errors
    ///
    /// Returns [`MachineRegistryError::Domain`] for a non-positive capacity
    /// and [`MachineRegistryError::Repository`] when the id is taken or
    /// persistence fails.
    pub async fn register(
        &self,
        request: RegisterMachineRequest,
    ) -> MachineRegistryResult<Machine> {
        let capacity = Capacity::new(request.capacity_kg)?;
        let machine = match request.id {
            Some(raw_id) => {
                let machine = Machine::new(MachineId::new(raw_id), capacity);
                self.repository.register(&machine).await?;
                machine
            }
            None => self.repository.register_next(capacity).await?,
        };
        tracing::info!(
            machine_id = %machine.id(),
            capacity_kg = capacity.kilograms(),
            "machine registered"
        );
        Ok(machine)
    }

    /// Returns the machine with the given id.
    ///
    /// # Errors
    ///
    /// Returns [`MachineRepositoryError::NotFound`] wrapped in
    /// [`MachineRegistryError::Repository`] when the id is not registered.
    pub async fn get(&self, id: MachineId) -> MachineRegistryResult<Machine> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| MachineRepositoryError::NotFound(id).into())
    }

    /// Returns all machines in insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`MachineRegistryError::Repository`] when persistence lookup
    /// fails.
    pub async fn list(&self) -> MachineRegistryResult<Vec<Machine>> {
        Ok(self.repository.list_all().await?)
    }

    /// Changes the capacity of a registered machine.
    ///
    /// # Errors
    ///
    /// Returns [`MachineRegistryError::Domain`] for a non-positive capacity
    /// or [`MachineRegistryError::Repository`] when the machine is missing.
    pub async fn update_capacity(
        &self,
        id: MachineId,
        capacity_kg: i64,
    ) -> MachineRegistryResult<Machine> {
        let capacity = Capacity::new(capacity_kg)?;
        let mut machine = self.get(id).await?;
        machine.set_capacity(capacity);
        self.repository.update(&machine).await?;
        tracing::info!(
            machine_id = %id,
            capacity_kg = capacity.kilograms(),
            "machine capacity updated"
        );
        Ok(machine)
    }

    /// Removes a machine. Its reservations stay in the ledger.
    ///
    /// # Errors
    ///
    /// Returns [`MachineRegistryError::Repository`] when the machine is
    /// missing or persistence fails.
    pub async fn remove(&self, id: MachineId) -> MachineRegistryResult<Machine> {
        let removed = self.repository.remove(id).await?;
        tracing::info!(machine_id = %id, "machine removed");
        Ok(removed)
    }

    /// Loads `seeds` into the registry when it is empty.
    ///
    /// Returns how many machines were written.
    ///
    /// # Errors
    ///
    /// Returns [`MachineRegistryError::Domain`] when a seed capacity is
    /// invalid and [`MachineRegistryError::Repository`] with
    /// [`MachineRepositoryError::DuplicateMachine`] when two seeds share an
    /// id. Nothing is written on error.
    pub async fn seed_if_empty(&self, seeds: &[MachineSeed]) -> MachineRegistryResult<usize> {
        let machines = seeds
            .iter()
            .map(|seed| {
                let capacity = Capacity::new(seed.capacity_kg)?;
                Ok(Machine::new(MachineId::new(seed.id), capacity))
            })
            .collect::<Result<Vec<_>, MachineDomainError>>()?;
        let written = self.repository.seed_if_empty(&machines).await?;
        if written > 0 {
            tracing::info!(count = written, "seeded machine registry");
        }
        Ok(written)
    }
}
