//! In-memory machine registry adapter.

mod registry;

pub use registry::InMemoryMachineRegistry;
