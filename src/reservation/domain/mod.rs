//! Domain model for slot reservations.
//!
//! A reservation binds a customer to a slot: one machine at one instant of
//! naive local time, at second precision. Occupancy is resolved against the
//! minute an instant falls in.

mod customer;
mod error;
mod occupancy;
mod reservation;
mod slot;
mod time;

pub use customer::Customer;
pub use error::ReservationDomainError;
pub use occupancy::{Occupancy, resolve_occupancy};
pub use reservation::Reservation;
pub use slot::Slot;
pub use time::BookingTime;
