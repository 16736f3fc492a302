//! Shared test helpers for store-level integration tests.

use std::sync::Arc;

use camino::Utf8Path;
use chrono::NaiveDateTime;
use mockable::DefaultClock;
use rstest::fixture;
use tempfile::TempDir;
use washbook::{
    api::{AppState, SharedClock},
    storage::DataDir,
    store::Store,
};

/// Provides handler state over a fresh in-memory store.
#[fixture]
pub fn memory_state() -> AppState {
    state_for(&Store::in_memory())
}

/// Builds handler state over `store` with the system clock.
#[must_use]
pub fn state_for(store: &Store) -> AppState {
    let clock: Arc<SharedClock> = Arc::new(DefaultClock);
    AppState::new(store, clock)
}

/// A temporary data directory and the path it lives at.
pub struct TempData {
    /// Keeps the directory alive for the test's duration.
    pub dir: TempDir,
}

impl TempData {
    /// Opens a file-backed store over the directory.
    ///
    /// # Panics
    ///
    /// Panics when the directory cannot be opened.
    #[must_use]
    pub fn open_store(&self) -> Store {
        let path = Utf8Path::from_path(self.dir.path()).expect("utf8 temp path");
        Store::file_backed(&DataDir::open(path).expect("open data dir"))
    }
}

/// Provides an empty temporary data directory.
#[fixture]
pub fn temp_data() -> TempData {
    TempData {
        dir: tempfile::tempdir().expect("temp dir"),
    }
}

/// Parses a `YYYY-MM-DDTHH:MM:SS` test instant.
///
/// # Panics
///
/// Panics on a malformed literal.
#[must_use]
pub fn at(raw: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S").expect("valid test instant")
}
