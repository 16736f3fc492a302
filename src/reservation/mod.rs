//! Reservation ledger.
//!
//! Books (machine, timestamp) slots for customers, rejects double bookings,
//! and resolves point-in-time occupancy. The module follows hexagonal
//! architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
