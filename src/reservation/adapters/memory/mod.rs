//! In-memory reservation ledger adapter.

mod ledger;

pub use ledger::InMemoryReservationLedger;
