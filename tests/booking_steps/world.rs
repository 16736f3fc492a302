//! Shared world state for booking BDD scenarios.

use std::sync::Arc;

use mockable::DefaultClock;
use rstest::fixture;
use washbook::{
    machine::{adapters::memory::InMemoryMachineRegistry, services::MachineRegistryService},
    reservation::{
        adapters::memory::InMemoryReservationLedger,
        domain::Reservation,
        services::{ReservationLedgerError, ReservationLedgerService},
    },
};

/// Registry service used by the BDD world.
pub type TestRegistryService = MachineRegistryService<InMemoryMachineRegistry>;

/// Ledger service used by the BDD world.
pub type TestLedgerService =
    ReservationLedgerService<InMemoryMachineRegistry, InMemoryReservationLedger, DefaultClock>;

/// Scenario world for booking behaviour tests.
pub struct BookingWorld {
    /// The registry service under test.
    pub registry: TestRegistryService,
    /// The ledger service under test.
    pub ledger: TestLedgerService,
    /// Result of the last booking attempt.
    pub last_booking: Option<Result<Reservation, ReservationLedgerError>>,
}

impl BookingWorld {
    /// Creates a world over empty in-memory repositories.
    #[must_use]
    pub fn new() -> Self {
        let machines = Arc::new(InMemoryMachineRegistry::new());
        Self {
            registry: MachineRegistryService::new(Arc::clone(&machines)),
            ledger: ReservationLedgerService::new(
                machines,
                Arc::new(InMemoryReservationLedger::new()),
                Arc::new(DefaultClock),
            ),
            last_booking: None,
        }
    }
}

impl Default for BookingWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> BookingWorld {
    BookingWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
