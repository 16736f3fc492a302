//! Washbook: washing machine registry and slot booking.
//!
//! The crate tracks a small registry of washing machines and lets clients
//! reserve a time slot on a machine. Double bookings are rejected and the
//! occupancy of a machine can be resolved for any instant.
//!
//! # Architecture
//!
//! Each component follows hexagonal architecture principles:
//!
//! - **Domain**: validated value types with no infrastructure dependencies
//! - **Ports**: async repository traits
//! - **Adapters**: in-memory and JSON-file implementations of the ports
//! - **Services**: use cases over the ports
//!
//! # Modules
//!
//! - [`machine`]: machine registry
//! - [`reservation`]: reservation ledger and status resolution
//! - [`api`]: HTTP surface
//! - [`store`]: the process-wide pair of repositories
//!
//! # Running
//!
//! ```no_run
//! use washbook::{Application, config::{Args, Config}};
//!
//! # async fn run() -> anyhow::Result<()> {
//! let config = Config::load(&Args {
//!     config: "washbook.yaml".to_owned(),
//!     validate: false,
//! })?;
//! let app = Application::new(&config).await?;
//! app.serve(async {
//!     let _ = tokio::signal::ctrl_c().await;
//! })
//! .await
//! # }
//! ```

pub mod api;
pub mod config;
pub mod error;
pub mod machine;
pub mod reservation;
pub mod storage;
pub mod store;
pub mod telemetry;

use crate::api::{AppState, SharedClock};
use crate::config::Config;
use crate::store::Store;
use anyhow::Context;
use mockable::DefaultClock;
use std::future::Future;
use std::sync::Arc;
use tokio::net::TcpListener;

/// A configured server ready to bind.
pub struct Application {
    state: AppState,
    bind_address: String,
}

impl Application {
    /// Opens the configured store and seeds an empty registry.
    ///
    /// # Errors
    ///
    /// Returns an error when the data directory cannot be opened or seeding
    /// fails.
    pub async fn new(config: &Config) -> anyhow::Result<Self> {
        let store = Store::from_config(&config.storage)
            .with_context(|| format!("opening {:?} storage", config.storage.backend))?;
        let clock: Arc<SharedClock> = Arc::new(DefaultClock);
        let state = AppState::new(&store, clock);

        let seeded = state
            .registry
            .seed_if_empty(&config.seed_machines)
            .await
            .context("seeding machine registry")?;
        tracing::debug!(seeded, "startup seeding finished");

        Ok(Self {
            state,
            bind_address: config.bind_address(),
        })
    }

    /// Binds the listener and serves until `shutdown` resolves.
    ///
    /// # Errors
    ///
    /// Returns an error when the address cannot be bound or the server
    /// fails.
    pub async fn serve<F>(self, shutdown: F) -> anyhow::Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let listener = TcpListener::bind(&self.bind_address)
            .await
            .with_context(|| format!("binding {}", self.bind_address))?;
        tracing::info!(address = %self.bind_address, "washbook listening");

        axum::serve(listener, api::router(self.state))
            .with_graceful_shutdown(shutdown)
            .await
            .context("serving HTTP")?;
        tracing::info!("server stopped");
        Ok(())
    }
}
