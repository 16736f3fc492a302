//! Given steps for booking BDD scenarios.

use super::world::{BookingWorld, run_async};
use eyre::WrapErr;
use rstest_bdd_macros::given;
use washbook::{
    machine::services::RegisterMachineRequest, reservation::services::BookReservationRequest,
};

#[given("a registered machine {id:u32} with capacity {capacity:i64} kg")]
fn registered_machine(
    world: &mut BookingWorld,
    id: u32,
    capacity: i64,
) -> Result<(), eyre::Report> {
    let request = RegisterMachineRequest::new(capacity).with_id(id);
    run_async(world.registry.register(request)).wrap_err("register machine for scenario")?;
    Ok(())
}

#[given(r#""{customer}" has booked machine {id:u32} at "{timestamp}""#)]
fn existing_booking(
    world: &mut BookingWorld,
    customer: String,
    id: u32,
    timestamp: String,
) -> Result<(), eyre::Report> {
    let request = BookReservationRequest::new(id, timestamp, customer);
    run_async(world.ledger.book(request)).wrap_err("book slot for scenario")?;
    Ok(())
}
