//! HTTP surface of the booking service.
//!
//! Routes:
//!
//! - `GET /machines`, `POST /machines`
//! - `GET /machines/{id}`, `PUT /machines/{id}`, `DELETE /machines/{id}`
//! - `GET /reservations`, `POST /reservations`
//! - `GET /status/{machine_id}`
//! - `GET /healthz`

mod error;
mod machines;
pub mod models;
mod reservations;
mod status;

pub use error::{ApiError, ErrorBody};

use crate::machine::{ports::MachineRepository, services::MachineRegistryService};
use crate::reservation::{ports::ReservationRepository, services::ReservationLedgerService};
use crate::store::Store;
use axum::{Router, routing::get};
use mockable::Clock;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// Clock shared by request handlers.
pub type SharedClock = dyn Clock + Send + Sync;

/// Registry service over the store's machine repository.
pub type RegistryService = MachineRegistryService<dyn MachineRepository>;

/// Ledger service over the store's repositories.
pub type LedgerService =
    ReservationLedgerService<dyn MachineRepository, dyn ReservationRepository, SharedClock>;

/// State handed to every handler.
#[derive(Clone)]
pub struct AppState {
    /// Machine registry service.
    pub registry: Arc<RegistryService>,
    /// Reservation ledger service.
    pub ledger: Arc<LedgerService>,
}

impl AppState {
    /// Builds both services over `store`.
    #[must_use]
    pub fn new(store: &Store, clock: Arc<SharedClock>) -> Self {
        Self {
            registry: Arc::new(MachineRegistryService::new(store.machines())),
            ledger: Arc::new(ReservationLedgerService::new(
                store.machines(),
                store.reservations(),
                clock,
            )),
        }
    }
}

/// Builds the application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route(
            "/machines",
            get(machines::list_machines).post(machines::create_machine),
        )
        .route(
            "/machines/{id}",
            get(machines::get_machine)
                .put(machines::update_machine)
                .delete(machines::delete_machine),
        )
        .route(
            "/reservations",
            get(reservations::list_reservations).post(reservations::create_reservation),
        )
        .route("/status/{machine_id}", get(status::machine_status))
        .route("/healthz", get(|| async { "ok" }))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
