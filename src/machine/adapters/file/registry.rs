//! File-backed repository for the machine registry.

use super::models::MachineRow;
use crate::machine::{
    adapters::{check_unique_ids, next_machine_id},
    domain::{Capacity, Machine, MachineId},
    ports::{MachineRepository, MachineRepositoryError, MachineRepositoryResult},
};
use crate::storage::{DataDir, JsonTable};
use async_trait::async_trait;
use std::sync::{Arc, Mutex};

/// File name of the machines table inside the data directory.
pub const MACHINES_TABLE: &str = "machines.json";

/// Machine registry persisted as a JSON table.
///
/// Every operation reads the full table and every mutation rewrites it. The
/// mutex spans the whole load-check-save sequence.
#[derive(Debug, Clone)]
pub struct FileMachineRegistry {
    table: Arc<Mutex<JsonTable<MachineRow>>>,
}

impl FileMachineRegistry {
    /// Creates a registry stored in `data_dir`.
    #[must_use]
    pub fn new(data_dir: &DataDir) -> Self {
        Self {
            table: Arc::new(Mutex::new(data_dir.table(MACHINES_TABLE))),
        }
    }

    async fn run_blocking<F, T>(&self, f: F) -> MachineRepositoryResult<T>
    where
        F: FnOnce(&JsonTable<MachineRow>) -> MachineRepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let table = Arc::clone(&self.table);
        tokio::task::spawn_blocking(move || {
            let guard = table.lock().map_err(|err| {
                MachineRepositoryError::persistence(std::io::Error::other(err.to_string()))
            })?;
            f(&guard)
        })
        .await
        .map_err(MachineRepositoryError::persistence)?
    }
}

fn load_machines(table: &JsonTable<MachineRow>) -> MachineRepositoryResult<Vec<Machine>> {
    table
        .load()
        .map_err(MachineRepositoryError::persistence)?
        .into_iter()
        .map(|row| Machine::try_from(row).map_err(MachineRepositoryError::invalid_persisted_data))
        .collect()
}

fn save_machines(
    table: &JsonTable<MachineRow>,
    machines: &[Machine],
) -> MachineRepositoryResult<()> {
    let rows: Vec<MachineRow> = machines.iter().map(MachineRow::from).collect();
    table.save(&rows).map_err(MachineRepositoryError::persistence)
}

#[async_trait]
impl MachineRepository for FileMachineRegistry {
    async fn register(&self, machine: &Machine) -> MachineRepositoryResult<()> {
        let machine = *machine;
        self.run_blocking(move |table| {
            let mut machines = load_machines(table)?;
            if machines.iter().any(|existing| existing.id() == machine.id()) {
                return Err(MachineRepositoryError::DuplicateMachine(machine.id()));
            }
            machines.push(machine);
            save_machines(table, &machines)
        })
        .await
    }

    async fn register_next(&self, capacity: Capacity) -> MachineRepositoryResult<Machine> {
        self.run_blocking(move |table| {
            let mut machines = load_machines(table)?;
            let id = next_machine_id(machines.iter().map(Machine::id))?;
            let machine = Machine::new(id, capacity);
            machines.push(machine);
            save_machines(table, &machines)?;
            Ok(machine)
        })
        .await
    }

    async fn seed_if_empty(&self, seeds: &[Machine]) -> MachineRepositoryResult<usize> {
        check_unique_ids(seeds)?;
        let seeds = seeds.to_vec();
        self.run_blocking(move |table| {
            if !load_machines(table)?.is_empty() {
                return Ok(0);
            }
            save_machines(table, &seeds)?;
            Ok(seeds.len())
        })
        .await
    }

    async fn update(&self, machine: &Machine) -> MachineRepositoryResult<()> {
        let machine = *machine;
        self.run_blocking(move |table| {
            let mut machines = load_machines(table)?;
            let slot = machines
                .iter_mut()
                .find(|existing| existing.id() == machine.id())
                .ok_or(MachineRepositoryError::NotFound(machine.id()))?;
            *slot = machine;
            save_machines(table, &machines)
        })
        .await
    }

    async fn remove(&self, id: MachineId) -> MachineRepositoryResult<Machine> {
        self.run_blocking(move |table| {
            let mut machines = load_machines(table)?;
            let position = machines
                .iter()
                .position(|existing| existing.id() == id)
                .ok_or(MachineRepositoryError::NotFound(id))?;
            let removed = machines.remove(position);
            save_machines(table, &machines)?;
            Ok(removed)
        })
        .await
    }

    async fn find_by_id(&self, id: MachineId) -> MachineRepositoryResult<Option<Machine>> {
        self.run_blocking(move |table| {
            Ok(load_machines(table)?
                .into_iter()
                .find(|machine| machine.id() == id))
        })
        .await
    }

    async fn list_all(&self) -> MachineRepositoryResult<Vec<Machine>> {
        self.run_blocking(load_machines).await
    }
}
