//! Registered machine record.

use super::{Capacity, MachineId};

/// A registered washing machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Machine {
    id: MachineId,
    capacity: Capacity,
}

impl Machine {
    /// Creates a machine record from validated parts.
    #[must_use]
    pub const fn new(id: MachineId, capacity: Capacity) -> Self {
        Self { id, capacity }
    }

    /// Returns the machine identifier.
    #[must_use]
    pub const fn id(&self) -> MachineId {
        self.id
    }

    /// Returns the load capacity.
    #[must_use]
    pub const fn capacity(&self) -> Capacity {
        self.capacity
    }

    /// Replaces the load capacity.
    pub const fn set_capacity(&mut self, capacity: Capacity) {
        self.capacity = capacity;
    }
}
