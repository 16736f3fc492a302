//! Domain model for the machine registry.
//!
//! Machines are identified by a caller-assigned numeric id and carry a
//! validated load capacity. No infrastructure concerns cross this boundary.

mod capacity;
mod error;
mod ids;
mod machine;

pub use capacity::Capacity;
pub use error::MachineDomainError;
pub use ids::MachineId;
pub use machine::Machine;
