//! Adapter implementations for the reservation ledger ports.

pub mod file;
pub mod memory;
