//! Reservation record.

use super::{BookingTime, Customer, Slot};
use crate::machine::domain::MachineId;

/// A booked slot. Reservations are never mutated once created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reservation {
    slot: Slot,
    customer: Customer,
}

impl Reservation {
    /// Creates a reservation for `customer` on `slot`.
    #[must_use]
    pub const fn new(slot: Slot, customer: Customer) -> Self {
        Self { slot, customer }
    }

    /// Returns the booked slot.
    #[must_use]
    pub const fn slot(&self) -> Slot {
        self.slot
    }

    /// Returns the reserved machine.
    #[must_use]
    pub const fn machine_id(&self) -> MachineId {
        self.slot.machine_id()
    }

    /// Returns the reserved instant.
    #[must_use]
    pub const fn time(&self) -> BookingTime {
        self.slot.time()
    }

    /// Returns the customer holding the reservation.
    #[must_use]
    pub const fn customer(&self) -> &Customer {
        &self.customer
    }
}
