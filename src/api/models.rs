//! Request and response bodies.

use crate::machine::domain::Machine;
use crate::reservation::domain::{Occupancy, Reservation};
use serde::{Deserialize, Serialize};

/// A registered machine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MachineResponse {
    /// Machine identifier.
    pub id: u32,
    /// Capacity in kilograms.
    pub capacity_kg: u32,
}

impl From<&Machine> for MachineResponse {
    fn from(machine: &Machine) -> Self {
        Self {
            id: machine.id().value(),
            capacity_kg: machine.capacity().kilograms(),
        }
    }
}

/// Body of `POST /machines`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateMachine {
    /// Caller-assigned identifier; allocated when absent.
    #[serde(default)]
    pub id: Option<u32>,
    /// Capacity in kilograms.
    pub capacity_kg: i64,
}

/// Body of `PUT /machines/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateMachine {
    /// New capacity in kilograms.
    pub capacity_kg: i64,
}

/// Body of `POST /reservations`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateReservation {
    /// Machine to book.
    pub machine_id: u32,
    /// ISO-8601 local date-time.
    pub timestamp: String,
    /// Customer name.
    pub customer: String,
}

/// A booked slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReservationResponse {
    /// Booked machine.
    pub machine_id: u32,
    /// Booked instant as `YYYY-MM-DDTHH:MM:SS`.
    pub timestamp: String,
    /// Customer name.
    pub customer: String,
}

impl From<&Reservation> for ReservationResponse {
    fn from(reservation: &Reservation) -> Self {
        Self {
            machine_id: reservation.machine_id().value(),
            timestamp: reservation.time().to_string(),
            customer: reservation.customer().as_str().to_owned(),
        }
    }
}

/// Query of `GET /reservations`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReservationsQuery {
    /// Restricts the listing to one machine.
    pub machine_id: Option<u32>,
}

/// Query of `GET /status/{machine_id}`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StatusQuery {
    /// Instant to resolve; the current local time when absent.
    pub at: Option<String>,
}

/// Occupancy of a machine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum StatusResponse {
    /// No reservation in the queried minute.
    Available,
    /// A reservation falls in the queried minute.
    Occupied {
        /// Customer holding the reservation.
        customer: String,
    },
}

impl From<Occupancy> for StatusResponse {
    fn from(occupancy: Occupancy) -> Self {
        match occupancy {
            Occupancy::Available => Self::Available,
            Occupancy::Occupied { customer } => Self::Occupied {
                customer: customer.as_str().to_owned(),
            },
        }
    }
}
