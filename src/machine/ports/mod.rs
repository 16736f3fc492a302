//! Port contracts for the machine registry.
//!
//! Ports define infrastructure-agnostic interfaces used by registry services.

pub mod repository;

pub use repository::{MachineRepository, MachineRepositoryError, MachineRepositoryResult};
