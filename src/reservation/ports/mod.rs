//! Port contracts for the reservation ledger.

pub mod repository;

pub use repository::{
    ReservationRepository, ReservationRepositoryError, ReservationRepositoryResult,
};
