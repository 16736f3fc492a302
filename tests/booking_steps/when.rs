//! When steps for booking BDD scenarios.

use super::world::{BookingWorld, run_async};
use rstest_bdd_macros::when;
use washbook::reservation::services::BookReservationRequest;

#[when(r#""{customer}" books machine {id:u32} at "{timestamp}""#)]
fn book_slot(world: &mut BookingWorld, customer: String, id: u32, timestamp: String) {
    let request = BookReservationRequest::new(id, timestamp, customer);
    world.last_booking = Some(run_async(world.ledger.book(request)));
}
