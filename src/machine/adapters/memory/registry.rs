//! In-memory repository for the machine registry.

use async_trait::async_trait;
use std::sync::{Arc, RwLock};

use crate::machine::{
    domain::{Capacity, Machine, MachineId},
    ports::{MachineRepository, MachineRepositoryError, MachineRepositoryResult},
};

use super::super::{check_unique_ids, next_machine_id};

/// Thread-safe in-memory machine registry.
///
/// Machines are kept in a vector so listings preserve insertion order.
#[derive(Debug, Clone, Default)]
pub struct InMemoryMachineRegistry {
    machines: Arc<RwLock<Vec<Machine>>>,
}

impl InMemoryMachineRegistry {
    /// Creates an empty in-memory registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn lock_poisoned(err: impl ToString) -> MachineRepositoryError {
    MachineRepositoryError::persistence(std::io::Error::other(err.to_string()))
}

#[async_trait]
impl MachineRepository for InMemoryMachineRegistry {
    async fn register(&self, machine: &Machine) -> MachineRepositoryResult<()> {
        let mut machines = self.machines.write().map_err(lock_poisoned)?;
        if machines.iter().any(|existing| existing.id() == machine.id()) {
            return Err(MachineRepositoryError::DuplicateMachine(machine.id()));
        }
        machines.push(*machine);
        Ok(())
    }

    async fn register_next(&self, capacity: Capacity) -> MachineRepositoryResult<Machine> {
        let mut machines = self.machines.write().map_err(lock_poisoned)?;
        let id = next_machine_id(machines.iter().map(Machine::id))?;
        let machine = Machine::new(id, capacity);
        machines.push(machine);
        Ok(machine)
    }

    async fn seed_if_empty(&self, seeds: &[Machine]) -> MachineRepositoryResult<usize> {
        check_unique_ids(seeds)?;
        let mut machines = self.machines.write().map_err(lock_poisoned)?;
        if !machines.is_empty() {
            return Ok(0);
        }
        machines.extend_from_slice(seeds);
        Ok(seeds.len())
    }

    async fn update(&self, machine: &Machine) -> MachineRepositoryResult<()> {
        let mut machines = self.machines.write().map_err(lock_poisoned)?;
        let slot = machines
            .iter_mut()
            .find(|existing| existing.id() == machine.id())
            .ok_or(MachineRepositoryError::NotFound(machine.id()))?;
        *slot = *machine;
        Ok(())
    }

    async fn remove(&self, id: MachineId) -> MachineRepositoryResult<Machine> {
        let mut machines = self.machines.write().map_err(lock_poisoned)?;
        let position = machines
            .iter()
            .position(|existing| existing.id() == id)
            .ok_or(MachineRepositoryError::NotFound(id))?;
        Ok(machines.remove(position))
    }

    async fn find_by_id(&self, id: MachineId) -> MachineRepositoryResult<Option<Machine>> {
        let machines = self.machines.read().map_err(lock_poisoned)?;
        Ok(machines.iter().find(|machine| machine.id() == id).copied())
    }

    async fn list_all(&self) -> MachineRepositoryResult<Vec<Machine>> {
        let machines = self.machines.read().map_err(lock_poisoned)?;
        Ok(machines.clone())
    }
}
