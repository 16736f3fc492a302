//! Adapter implementations for the machine registry ports.

pub mod file;
pub mod memory;

use crate::machine::{
    domain::{Machine, MachineId},
    ports::{MachineRepositoryError, MachineRepositoryResult},
};
use std::collections::HashSet;

/// Returns the identifier one past the largest in `ids`, or `1` when empty.
fn next_machine_id(ids: impl Iterator<Item = MachineId>) -> MachineRepositoryResult<MachineId> {
    match ids.max() {
        None => Ok(MachineId::new(1)),
        Some(largest) => largest
            .next()
            .ok_or(MachineRepositoryError::IdSpaceExhausted),
    }
}

/// Rejects a batch that repeats an identifier.
fn check_unique_ids(machines: &[Machine]) -> MachineRepositoryResult<()> {
    let mut seen = HashSet::with_capacity(machines.len());
    for machine in machines {
        if !seen.insert(machine.id()) {
            return Err(MachineRepositoryError::DuplicateMachine(machine.id()));
        }
    }
    Ok(())
}
