//! Service layer for booking and occupancy queries.
//!
//! Provides [`ReservationLedgerService`] which validates bookings against the
//! machine registry and resolves occupancy from the ledger.

use crate::error::ErrorKind;
use crate::machine::{
    domain::MachineId,
    ports::{MachineRepository, MachineRepositoryError},
};
use crate::reservation::{
    domain::{
        BookingTime, Customer, Occupancy, Reservation, ReservationDomainError, Slot,
        resolve_occupancy,
    },
    ports::{ReservationRepository, ReservationRepositoryError},
};
use chrono::NaiveDateTime;
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Request payload for booking a slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookReservationRequest {
    machine_id: u32,
    timestamp: String,
    customer: String,
}

impl BookReservationRequest {
    /// Creates a booking request from raw client input.
    #[must_use]
    pub fn new(machine_id: u32, timestamp: impl Into<String>, customer: impl Into<String>) -> Self {
        Self {
            machine_id,
            timestamp: timestamp.into(),
            customer: customer.into(),
        }
    }
}

/// Service-level errors for ledger operations.
#[derive(Debug, Error)]
pub enum ReservationLedgerError {
    /// The machine to book is not registered.
    #[error("machine not found: {0}")]
    UnknownMachine(MachineId),
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] ReservationDomainError),
    /// Reservation repository operation failed.
    #[error(transparent)]
    Repository(#[from] ReservationRepositoryError),
    /// Machine lookup failed.
    #[error(transparent)]
    Machines(#[from] MachineRepositoryError),
}

impl ReservationLedgerError {
    /// Classifies the error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::UnknownMachine(_) => ErrorKind::NotFound,
            Self::Domain(_) => ErrorKind::InvalidInput,
            Self::Repository(err) => err.kind(),
            Self::Machines(err) => err.kind(),
        }
    }
}

/// Result type for ledger service operations.
pub type ReservationLedgerResult<T> = Result<T, ReservationLedgerError>;

/// Booking and occupancy service.
pub struct ReservationLedgerService<M, R, C>
where
    M: MachineRepository + ?Sized,
    R: ReservationRepository + ?Sized,
    C: Clock + Send + Sync + ?Sized,
{
    machines: Arc<M>,
    reservations: Arc<R>,
    clock: Arc<C>,
}

impl<M, R, C> Clone for ReservationLedgerService<M, R, C>
where
    M: MachineRepository + ?Sized,
    R: ReservationRepository + ?Sized,
    C: Clock + Send + Sync + ?Sized,
{
    fn clone(&self) -> Self {
        Self {
            machines: Arc::clone(&self.machines),
            reservations: Arc::clone(&self.reservations),
            clock: Arc::clone(&self.clock),
        }
    }
}

impl<M, R, C> ReservationLedgerService<M, R, C>
where
    M: MachineRepository + ?Sized,
    R: ReservationRepository + ?Sized,
    C: Clock + Send + Sync + ?Sized,
{
    /// Creates a new ledger service.
    #[must_use]
    pub const fn new(machines: Arc<M>, reservations: Arc<R>, clock: Arc<C>) -> Self {
        Self {
            machines,
            reservations,
            clock,
        }
    }

    /// Books a slot.
    ///
    /// Checks run in order: machine registered, timestamp well formed,
    /// customer non-empty, slot free.
    ///
    /// # Errors
    ///
    /// Returns [`ReservationLedgerError::UnknownMachine`] for an unregistered
    /// machine, [`ReservationLedgerError::Domain`] for a malformed timestamp
    /// or empty customer, and [`ReservationLedgerError::Repository`] with
    /// [`ReservationRepositoryError::DuplicateSlot`] when the slot is taken.
    pub async fn book(
        &self,
        request: BookReservationRequest,
    ) -> ReservationLedgerResult<Reservation> {
        let BookReservationRequest {
            machine_id: raw_machine_id,
            timestamp,
            customer: raw_customer,
        } = request;

        let machine_id = MachineId::new(raw_machine_id);
        if self.machines.find_by_id(machine_id).await?.is_none() {
            tracing::debug!(%machine_id, "booking rejected: unknown machine");
            return Err(ReservationLedgerError::UnknownMachine(machine_id));
        }
        let time = BookingTime::parse(&timestamp)?;
        let customer = Customer::new(raw_customer)?;

        let reservation = Reservation::new(Slot::new(machine_id, time), customer);
        if let Err(err) = self.reservations.store(&reservation).await {
            tracing::debug!(%machine_id, %time, error = %err, "booking rejected");
            return Err(err.into());
        }
        tracing::info!(%machine_id, %time, customer = %reservation.customer(), "slot booked");
        Ok(reservation)
    }

    /// Returns the reservations of one machine in booking order.
    ///
    /// # Errors
    ///
    /// Returns [`ReservationLedgerError::Repository`] when persistence lookup
    /// fails.
    pub async fn reservations_for(
        &self,
        machine_id: MachineId,
    ) -> ReservationLedgerResult<Vec<Reservation>> {
        Ok(self.reservations.find_by_machine(machine_id).await?)
    }

    /// Returns every reservation in booking order.
    ///
    /// # Errors
    ///
    /// Returns [`ReservationLedgerError::Repository`] when persistence lookup
    /// fails.
    pub async fn list(&self) -> ReservationLedgerResult<Vec<Reservation>> {
        Ok(self.reservations.list_all().await?)
    }

    /// Resolves occupancy of `machine_id` in the minute of `instant`.
    ///
    /// A machine with no reservations, registered or not, is available.
    ///
    /// # Errors
    ///
    /// Returns [`ReservationLedgerError::Repository`] when persistence lookup
    /// fails.
    pub async fn status_at(
        &self,
        machine_id: MachineId,
        instant: NaiveDateTime,
    ) -> ReservationLedgerResult<Occupancy> {
        let reservations = self.reservations.find_by_machine(machine_id).await?;
        Ok(resolve_occupancy(&reservations, instant))
    }

    /// Resolves occupancy of `machine_id` at the clock's current local time.
    ///
    /// # Errors
    ///
    /// Returns [`ReservationLedgerError::Repository`] when persistence lookup
    /// fails.
    pub async fn status_now(&self, machine_id: MachineId) -> ReservationLedgerResult<Occupancy> {
        let now = self.clock.local().naive_local();
        self.status_at(machine_id, now).await
    }
}
