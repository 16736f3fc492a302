//! Repository port for machine persistence and lookup.

use crate::error::ErrorKind;
use crate::machine::domain::{Capacity, Machine, MachineId};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for machine repository operations.
pub type MachineRepositoryResult<T> = Result<T, MachineRepositoryError>;

/// Machine registry persistence contract.
///
/// Implementations must perform every check-then-write sequence under a
/// single guard so concurrent callers cannot both pass a uniqueness check.
#[async_trait]
pub trait MachineRepository: Send + Sync {
    /// Stores a new machine under its caller-assigned identifier.
    ///
    /// # Errors
    ///
    /// Returns [`MachineRepositoryError::DuplicateMachine`] when the
    /// identifier is already registered.
    async fn register(&self, machine: &Machine) -> MachineRepositoryResult<()>;

    /// Stores a new machine under the next free identifier.
    ///
    /// The identifier is one past the largest registered id, or `1` for an
    /// empty registry. Allocation and insert happen atomically.
    ///
    /// # Errors
    ///
    /// Returns [`MachineRepositoryError::IdSpaceExhausted`] when no larger
    /// identifier exists.
    async fn register_next(&self, capacity: Capacity) -> MachineRepositoryResult<Machine>;

    /// Stores every machine in `machines` when the registry is empty.
    ///
    /// Returns the number of machines written, which is zero when the
    /// registry already holds entries.
    ///
    /// # Errors
    ///
    /// Returns [`MachineRepositoryError::DuplicateMachine`] when `machines`
    /// repeats an identifier. Nothing is written in that case.
    async fn seed_if_empty(&self, machines: &[Machine]) -> MachineRepositoryResult<usize>;

    /// Persists a changed capacity for an existing machine.
    ///
    /// # Errors
    ///
    /// Returns [`MachineRepositoryError::NotFound`] when the machine does not
    /// exist.
    async fn update(&self, machine: &Machine) -> MachineRepositoryResult<()>;

    /// Removes a machine and returns the removed record.
    ///
    /// Reservations referencing the machine are left untouched.
    ///
    /// # Errors
    ///
    /// Returns [`MachineRepositoryError::NotFound`] when the machine does not
    /// exist.
    async fn remove(&self, id: MachineId) -> MachineRepositoryResult<Machine>;

    /// Finds a machine by identifier.
    ///
    /// Returns `None` when the machine does not exist.
    async fn find_by_id(&self, id: MachineId) -> MachineRepositoryResult<Option<Machine>>;

    /// Returns all machines in insertion order.
    async fn list_all(&self) -> MachineRepositoryResult<Vec<Machine>>;
}

/// Errors returned by machine repository implementations.
#[derive(Debug, Clone, Error)]
pub enum MachineRepositoryError {
    /// A machine with the same identifier already exists.
    #[error("duplicate machine identifier: {0}")]
    DuplicateMachine(MachineId),

    /// The machine was not found.
    #[error("machine not found: {0}")]
    NotFound(MachineId),

    /// Every identifier up to `u32::MAX` is taken.
    #[error("no free machine identifier left")]
    IdSpaceExhausted,

    /// Persisted data could not be reconstructed into domain types.
    #[error("invalid persisted data: {0}")]
    InvalidPersistedData(Arc<dyn std::error::Error + Send + Sync>),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl MachineRepositoryError {
    /// Wraps a data-quality or deserialization error from persisted rows.
    pub fn invalid_persisted_data(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::InvalidPersistedData(Arc::new(err))
    }

    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }

    /// Classifies the error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::DuplicateMachine(_) => ErrorKind::Conflict,
            Self::NotFound(_) => ErrorKind::NotFound,
            Self::IdSpaceExhausted | Self::InvalidPersistedData(_) | Self::Persistence(_) => {
                ErrorKind::Internal
            }
        }
    }
}
