//! Application services for the machine registry.

mod registry;

pub use registry::{
    MachineRegistryError, MachineRegistryResult, MachineRegistryService, MachineSeed,
    RegisterMachineRequest,
};
