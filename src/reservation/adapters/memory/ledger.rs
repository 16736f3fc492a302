//! In-memory repository for the reservation ledger.

use async_trait::async_trait;
use std::collections::HashSet;
use std::sync::{Arc, RwLock};

use crate::machine::domain::MachineId;
use crate::reservation::{
    domain::{Reservation, Slot},
    ports::{ReservationRepository, ReservationRepositoryError, ReservationRepositoryResult},
};

/// Thread-safe in-memory reservation ledger.
#[derive(Debug, Clone, Default)]
pub struct InMemoryReservationLedger {
    state: Arc<RwLock<InMemoryLedgerState>>,
}

#[derive(Debug, Default)]
struct InMemoryLedgerState {
    reservations: Vec<Reservation>,
    booked_slots: HashSet<Slot>,
}

impl InMemoryReservationLedger {
    /// Creates an empty in-memory ledger.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ReservationRepository for InMemoryReservationLedger {
    async fn store(&self, reservation: &Reservation) -> ReservationRepositoryResult<()> {
        let mut state = self.state.write().map_err(|err| {
            ReservationRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        if !state.booked_slots.insert(reservation.slot()) {
            return Err(ReservationRepositoryError::DuplicateSlot(reservation.slot()));
        }
        state.reservations.push(reservation.clone());
        Ok(())
    }

    async fn find_by_machine(
        &self,
        machine_id: MachineId,
    ) -> ReservationRepositoryResult<Vec<Reservation>> {
        let state = self.state.read().map_err(|err| {
            ReservationRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        Ok(state
            .reservations
            .iter()
            .filter(|reservation| reservation.machine_id() == machine_id)
            .cloned()
            .collect())
    }

    async fn list_all(&self) -> ReservationRepositoryResult<Vec<Reservation>> {
        let state = self.state.read().map_err(|err| {
            ReservationRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        Ok(state.reservations.clone())
    }
}
