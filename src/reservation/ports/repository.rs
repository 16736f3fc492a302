//! Repository port for reservation persistence and lookup.

use crate::error::ErrorKind;
use crate::machine::domain::MachineId;
use crate::reservation::domain::{Reservation, Slot};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for reservation repository operations.
pub type ReservationRepositoryResult<T> = Result<T, ReservationRepositoryError>;

/// Reservation ledger persistence contract.
#[async_trait]
pub trait ReservationRepository: Send + Sync {
    /// Appends a reservation.
    ///
    /// The slot check and the append must happen under one guard: of any
    /// number of concurrent calls for the same slot exactly one succeeds.
    ///
    /// # Errors
    ///
    /// Returns [`ReservationRepositoryError::DuplicateSlot`] when the slot is
    /// already booked.
    async fn store(&self, reservation: &Reservation) -> ReservationRepositoryResult<()>;

    /// Returns the reservations of one machine in booking order.
    async fn find_by_machine(
        &self,
        machine_id: MachineId,
    ) -> ReservationRepositoryResult<Vec<Reservation>>;

    /// Returns every reservation in booking order.
    async fn list_all(&self) -> ReservationRepositoryResult<Vec<Reservation>>;
}

/// Errors returned by reservation repository implementations.
#[derive(Debug, Clone, Error)]
pub enum ReservationRepositoryError {
    /// The slot already holds a reservation.
    #[error("slot already booked: {0}")]
    DuplicateSlot(Slot),

    /// Persisted data could not be reconstructed into domain types.
    #[error("invalid persisted data: {0}")]
    InvalidPersistedData(Arc<dyn std::error::Error + Send + Sync>),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl ReservationRepositoryError {
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
            Self::DuplicateSlot(_) => ErrorKind::Conflict,
            Self::InvalidPersistedData(_) | Self::Persistence(_) => ErrorKind::Internal,
        }
    }
}
