//! Row shape of the reservations table.

use crate::machine::domain::MachineId;
use crate::reservation::domain::{BookingTime, Customer, Reservation, ReservationDomainError, Slot};
use serde::{Deserialize, Serialize};

/// One persisted reservation row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub(super) struct ReservationRow {
    pub machine_id: u32,
    pub timestamp: String,
    pub customer: String,
}

impl From<&Reservation> for ReservationRow {
    fn from(reservation: &Reservation) -> Self {
        Self {
            machine_id: reservation.machine_id().value(),
            timestamp: reservation.time().to_string(),
            customer: reservation.customer().as_str().to_owned(),
        }
    }
}

impl TryFrom<ReservationRow> for Reservation {
    type Error = ReservationDomainError;

    fn try_from(row: ReservationRow) -> Result<Self, Self::Error> {
        let slot = Slot::new(
            MachineId::new(row.machine_id),
            BookingTime::parse(&row.timestamp)?,
        );
        Ok(Self::new(slot, Customer::new(row.customer)?))
    }
}
