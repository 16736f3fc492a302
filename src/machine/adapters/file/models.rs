//! Row shape of the machines table.

use crate::machine::domain::{Capacity, Machine, MachineDomainError, MachineId};
use serde::{Deserialize, Serialize};

/// One persisted machine row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub(super) struct MachineRow {
    pub id: u32,
    pub capacity_kg: i64,
}

impl From<&Machine> for MachineRow {
    fn from(machine: &Machine) -> Self {
        Self {
            id: machine.id().value(),
            capacity_kg: i64::from(machine.capacity().kilograms()),
        }
    }
}

impl TryFrom<MachineRow> for Machine {
    type Error = MachineDomainError;

    fn try_from(row: MachineRow) -> Result<Self, Self::Error> {
        Ok(Self::new(MachineId::new(row.id), Capacity::new(row.capacity_kg)?))
    }
}
