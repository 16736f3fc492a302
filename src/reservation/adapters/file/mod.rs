//! JSON file adapter for reservation ledger persistence.

mod ledger;
mod models;

pub use ledger::{FileReservationLedger, RESERVATIONS_TABLE};
