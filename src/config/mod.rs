//! Typed settings read from the process environment.
//!
//! Keys take the form `LANDMARK_GUIDE__<SECTION>__<FIELD>`, for example
//! `LANDMARK_GUIDE__REMOTE__TIMEOUT_SECS=10`. A `.env` file in the working
//! directory is loaded first. Unset keys fall back to local-development
//! defaults, so `AppConfig::load()` on a bare machine succeeds.
//!
//! ```no_run
//! use landmark_guide::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//! ```

mod error;
mod remote;
mod server;
mod storage;
mod usage;

pub use error::{ConfigError, ValidationError};
pub use remote::RemoteConfig;
pub use server::{Environment, ServerConfig};
pub use storage::{StorageBackend, StorageConfig};
pub use usage::UsageConfig;

use serde::Deserialize;

const ENV_PREFIX: &str = "LANDMARK_GUIDE";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub storage: StorageConfig,
    pub remote: RemoteConfig,
    pub usage: UsageConfig,
}

impl AppConfig {
    /// Reads `.env` (if any) and the prefixed environment.
    ///
    /// Fails only when a present value has the wrong type; range checks
    /// live in [`AppConfig::validate`].
    pub fn load() -> Result<Self, ConfigError> {
        if let Err(e) = dotenvy::dotenv() {
            if !e.not_found() {
                return Err(ConfigError::DotEnv(e.to_string()));
            }
        }

        let source = config::Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("__")
            .separator("__");
        let config = config::Config::builder()
            .add_source(source)
            .build()?
            .try_deserialize()?;
        Ok(config)
    }

    /// Range and consistency checks across every section.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.storage.validate()?;
        self.remote.validate(self.is_production())?;
        self.usage.validate()
    }

    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }
}
