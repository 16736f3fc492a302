//! Then steps for booking BDD scenarios.

use super::world::{BookingWorld, run_async};
use chrono::NaiveDateTime;
use rstest_bdd_macros::then;
use washbook::{
    machine::domain::MachineId,
    reservation::domain::{BookingTime, Occupancy},
};

fn instant(raw: &str) -> Result<NaiveDateTime, eyre::Report> {
    BookingTime::parse(raw)
        .map(|time| time.as_naive())
        .map_err(|err| eyre::eyre!("bad scenario instant: {err}"))
}

#[then("the booking succeeds")]
fn booking_succeeds(world: &BookingWorld) -> Result<(), eyre::Report> {
    match world.last_booking.as_ref() {
        Some(Ok(_)) => Ok(()),
        Some(Err(err)) => Err(eyre::eyre!("expected booking to succeed, got {err}")),
        None => Err(eyre::eyre!("missing booking result in scenario world")),
    }
}

#[then(r#"the booking fails with a "{kind}" error"#)]
fn booking_fails_with(world: &BookingWorld, kind: String) -> Result<(), eyre::Report> {
    let result = world
        .last_booking
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing booking result in scenario world"))?;
    match result {
        Err(err) if err.kind().as_str() == kind => Ok(()),
        other => Err(eyre::eyre!("expected a {kind} error, got {other:?}")),
    }
}

#[then(r#"machine {id:u32} is occupied by "{customer}" at "{at}""#)]
fn machine_occupied(
    world: &BookingWorld,
    id: u32,
    customer: String,
    at: String,
) -> Result<(), eyre::Report> {
    let status = run_async(world.ledger.status_at(MachineId::new(id), instant(&at)?))
        .map_err(|err| eyre::eyre!("status lookup failed: {err}"))?;
    match status {
        Occupancy::Occupied { customer: holder } if holder.as_str() == customer => Ok(()),
        other => Err(eyre::eyre!("expected occupied by {customer}, got {other:?}")),
    }
}

#[then(r#"machine {id:u32} is available at "{at}""#)]
fn machine_available(world: &BookingWorld, id: u32, at: String) -> Result<(), eyre::Report> {
    let status = run_async(world.ledger.status_at(MachineId::new(id), instant(&at)?))
        .map_err(|err| eyre::eyre!("status lookup failed: {err}"))?;
    if !status.is_available() {
        return Err(eyre::eyre!("expected machine {id} to be available, got {status:?}"));
    }
    Ok(())
}

#[then("machine {id:u32} has {count:usize} reservations")]
fn machine_reservation_count(
    world: &BookingWorld,
    id: u32,
    count: usize,
) -> Result<(), eyre::Report> {
    let reservations = run_async(world.ledger.reservations_for(MachineId::new(id)))
        .map_err(|err| eyre::eyre!("reservation lookup failed: {err}"))?;
    if reservations.len() != count {
        return Err(eyre::eyre!(
            "expected {count} reservations on machine {id}, found {}",
            reservations.len()
        ));
    }
    Ok(())
}
