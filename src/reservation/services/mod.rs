//! Application services for the reservation ledger.

mod ledger;

pub use ledger::{
    BookReservationRequest, ReservationLedgerError, ReservationLedgerResult,
    ReservationLedgerService,
};
