//! Point-in-time occupancy resolution.
//!
//! Bookings are made at whole minutes by convention, so an instant is
//! compared with each reservation at minute granularity. This only detects
//! a reservation starting in the same minute; it is not a duration or range
//! calendar.

use super::{Customer, Reservation, time::truncate_to_minute};
use chrono::NaiveDateTime;

/// Occupancy of a machine at an instant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Occupancy {
    /// No reservation falls in the instant's minute.
    Available,
    /// A reservation falls in the instant's minute.
    Occupied {
        /// Customer holding the matching reservation.
        customer: Customer,
    },
}

impl Occupancy {
    /// Returns whether the machine is free.
    #[must_use]
    pub const fn is_available(&self) -> bool {
        matches!(self, Self::Available)
    }
}

/// Resolves occupancy of one machine from its reservations.
///
/// `reservations` must all belong to the machine being queried. The first
/// reservation, in the given order, whose minute equals the minute of
/// `instant` wins.
#[must_use]
pub fn resolve_occupancy(reservations: &[Reservation], instant: NaiveDateTime) -> Occupancy {
    let minute = truncate_to_minute(instant);
    reservations
        .iter()
        .find(|reservation| reservation.time().minute() == minute)
        .map_or(Occupancy::Available, |reservation| Occupancy::Occupied {
            customer: reservation.customer().clone(),
        })
}
