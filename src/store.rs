//! The process-wide store owning both persistent collections.

use crate::config::{StorageBackend, StorageConfig};
use crate::machine::{
    adapters::{file::FileMachineRegistry, memory::InMemoryMachineRegistry},
    ports::MachineRepository,
};
use crate::reservation::{
    adapters::{file::FileReservationLedger, memory::InMemoryReservationLedger},
    ports::ReservationRepository,
};
use crate::storage::{DataDir, StorageError};
use std::sync::Arc;

/// Machines and reservations behind their repository ports.
///
/// One store is built per process and shared with every request handler.
#[derive(Clone)]
pub struct Store {
    machines: Arc<dyn MachineRepository>,
    reservations: Arc<dyn ReservationRepository>,
}

impl Store {
    /// Creates a store that lives only as long as the process.
    #[must_use]
    pub fn in_memory() -> Self {
        Self {
            machines: Arc::new(InMemoryMachineRegistry::new()),
            reservations: Arc::new(InMemoryReservationLedger::new()),
        }
    }

    /// Creates a store persisted as JSON tables in `data_dir`.
    #[must_use]
    pub fn file_backed(data_dir: &DataDir) -> Self {
        Self {
            machines: Arc::new(FileMachineRegistry::new(data_dir)),
            reservations: Arc::new(FileReservationLedger::new(data_dir)),
        }
    }

    /// Builds the store selected by `config`.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::OpenDir`] when the file backend's data
    /// directory cannot be opened.
    pub fn from_config(config: &StorageConfig) -> Result<Self, StorageError> {
        match config.backend {
            StorageBackend::Memory => Ok(Self::in_memory()),
            StorageBackend::File => Ok(Self::file_backed(&DataDir::open(&config.data_dir)?)),
        }
    }

    /// Returns the machine repository.
    #[must_use]
    pub fn machines(&self) -> Arc<dyn MachineRepository> {
        Arc::clone(&self.machines)
    }

    /// Returns the reservation repository.
    #[must_use]
    pub fn reservations(&self) -> Arc<dyn ReservationRepository> {
        Arc::clone(&self.reservations)
    }
}
