//! Command-line arguments and layered configuration.
//!
//! Values come from defaults, then the YAML file named by `--config`, then
//! `WASHBOOK_`-prefixed environment variables. Nested keys use `__`, for
//! example `WASHBOOK_STORAGE__BACKEND=memory`.

use crate::machine::domain::{Capacity, MachineId};
use crate::machine::services::MachineSeed;
use camino::Utf8PathBuf;
use clap::Parser;
use figment::{
    Figment,
    providers::{Env, Format, Yaml},
};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;

/// Command-line arguments of the server binary.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about)]
pub struct Args {
    /// Path to the configuration file.
    #[arg(short = 'f', long, env = "WASHBOOK_CONFIG", default_value = "washbook.yaml")]
    pub config: String,

    /// Validate configuration and exit without starting the server.
    #[arg(long)]
    pub validate: bool,
}

/// Errors raised while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A provider failed or a value has the wrong shape.
    #[error(transparent)]
    Load(#[from] Box<figment::Error>),

    /// Values parsed but are not usable.
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

/// Which repository implementation backs the store.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StorageBackend {
    /// JSON tables in [`StorageConfig::data_dir`].
    #[default]
    File,
    /// Process memory; nothing survives a restart.
    Memory,
}

/// Storage settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct StorageConfig {
    /// Repository implementation.
    pub backend: StorageBackend,
    /// Directory holding the table files for the file backend.
    pub data_dir: Utf8PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: StorageBackend::File,
            data_dir: Utf8PathBuf::from("data"),
        }
    }
}

/// Root service configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Interface to bind.
    pub host: String,
    /// Port to bind.
    pub port: u16,
    /// Storage backend selection.
    pub storage: StorageConfig,
    /// Machines written into an empty registry at startup.
    pub seed_machines: Vec<MachineSeed>,
    /// Tracing directive used when `RUST_LOG` is unset.
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_owned(),
            port: 8000,
            storage: StorageConfig::default(),
            seed_machines: Vec::new(),
            log_filter: "info".to_owned(),
        }
    }
}

impl Config {
    /// Loads and validates configuration for `args`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Load`] when a provider fails and
    /// [`ConfigError::Invalid`] when validation rejects the result.
    pub fn load(args: &Args) -> Result<Self, ConfigError> {
        let config: Self = Self::figment(args).extract().map_err(Box::new)?;
        config.validate()?;
        Ok(config)
    }

    /// Returns the provider stack for `args`.
    #[must_use]
    pub fn figment(args: &Args) -> Figment {
        Figment::new()
            .merge(Yaml::file(&args.config))
            .merge(Env::prefixed("WASHBOOK_").ignore(&["config"]).split("__"))
    }

    /// Checks values that deserialize fine but cannot be used.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] for a zero port, a non-positive seed
    /// capacity, or seed machines sharing an id.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.port == 0 {
            return Err(ConfigError::Invalid("port must not be 0".to_owned()));
        }

        let mut seen = HashSet::with_capacity(self.seed_machines.len());
        for seed in &self.seed_machines {
            Capacity::new(seed.capacity_kg)
                .map_err(|err| ConfigError::Invalid(format!("seed machine {}: {err}", seed.id)))?;
            if !seen.insert(MachineId::new(seed.id)) {
                return Err(ConfigError::Invalid(format!(
                    "seed machine id {} is listed more than once",
                    seed.id
                )));
            }
        }
        Ok(())
    }

    /// Returns `host:port`.
    #[must_use]
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
