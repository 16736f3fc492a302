//! File-backed repository for the reservation ledger.

use super::models::ReservationRow;
use crate::machine::domain::MachineId;
use crate::reservation::{
    domain::Reservation,
    ports::{ReservationRepository, ReservationRepositoryError, ReservationRepositoryResult},
};
use crate::storage::{DataDir, JsonTable};
use async_trait::async_trait;
use std::sync::{Arc, Mutex};

/// File name of the reservations table inside the data directory.
pub const RESERVATIONS_TABLE: &str = "reservations.json";

/// Reservation ledger persisted as a JSON table.
///
/// Booking holds the mutex across load, slot check and full rewrite, which
/// serializes concurrent bookings within the process.
#[derive(Debug, Clone)]
pub struct FileReservationLedger {
    table: Arc<Mutex<JsonTable<ReservationRow>>>,
}

impl FileReservationLedger {
    /// Creates a ledger stored in `data_dir`.
    #[must_use]
    pub fn new(data_dir: &DataDir) -> Self {
        Self {
            table: Arc::new(Mutex::new(data_dir.table(RESERVATIONS_TABLE))),
        }
    }

    async fn run_blocking<F, T>(&self, f: F) -> ReservationRepositoryResult<T>
    where
        F: FnOnce(&JsonTable<ReservationRow>) -> ReservationRepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let table = Arc::clone(&self.table);
        tokio::task::spawn_blocking(move || {
            let guard = table.lock().map_err(|err| {
                ReservationRepositoryError::persistence(std::io::Error::other(err.to_string()))
            })?;
            f(&guard)
        })
        .await
        .map_err(ReservationRepositoryError::persistence)?
    }
}

fn load_reservations(
    table: &JsonTable<ReservationRow>,
) -> ReservationRepositoryResult<Vec<Reservation>> {
    table
        .load()
        .map_err(ReservationRepositoryError::persistence)?
        .into_iter()
        .map(|row| {
            Reservation::try_from(row).map_err(ReservationRepositoryError::invalid_persisted_data)
        })
        .collect()
}

#[async_trait]
impl ReservationRepository for FileReservationLedger {
    async fn store(&self, reservation: &Reservation) -> ReservationRepositoryResult<()> {
        let reservation = reservation.clone();
        self.run_blocking(move |table| {
            let mut reservations = load_reservations(table)?;
            if reservations
                .iter()
                .any(|existing| existing.slot() == reservation.slot())
            {
                return Err(ReservationRepositoryError::DuplicateSlot(reservation.slot()));
            }
            reservations.push(reservation);
            let rows: Vec<ReservationRow> =
                reservations.iter().map(ReservationRow::from).collect();
            table.save(&rows).map_err(ReservationRepositoryError::persistence)
        })
        .await
    }

    async fn find_by_machine(
        &self,
        machine_id: MachineId,
    ) -> ReservationRepositoryResult<Vec<Reservation>> {
        self.run_blocking(move |table| {
            let mut reservations = load_reservations(table)?;
            reservations.retain(|reservation| reservation.machine_id() == machine_id);
            Ok(reservations)
        })
        .await
    }

    async fn list_all(&self) -> ReservationRepositoryResult<Vec<Reservation>> {
        self.run_blocking(load_reservations).await
    }
}
