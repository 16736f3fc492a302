//! The unit of booking conflict.

use super::BookingTime;
use crate::machine::domain::MachineId;
use std::fmt;

/// One machine at one instant. At most one reservation exists per slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Slot {
    machine_id: MachineId,
    time: BookingTime,
}

impl Slot {
    /// Creates a slot.
    #[must_use]
    pub const fn new(machine_id: MachineId, time: BookingTime) -> Self {
        Self { machine_id, time }
    }

    /// Returns the machine identifier.
    #[must_use]
    pub const fn machine_id(&self) -> MachineId {
        self.machine_id
    }

    /// Returns the booked instant.
    #[must_use]
    pub const fn time(&self) -> BookingTime {
        self.time
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "machine {} at {}", self.machine_id, self.time)
    }
}
