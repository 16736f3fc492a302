//! JSON file adapter for machine registry persistence.

mod models;
mod registry;

pub use registry::{FileMachineRegistry, MACHINES_TABLE};
