//! Local storage configuration

use serde::Deserialize;
use std::path::PathBuf;

use super::error::ValidationError;

/// Key-value store backend
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    /// YAML snapshot on disk
    #[default]
    File,
    /// Process memory; everything is lost on restart
    Memory,
}

/// Storage configuration
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    #[serde(default)]
    pub backend: StorageBackend,

    /// Snapshot file for the `file` backend
    #[serde(default = "default_path")]
    pub path: PathBuf,
}

impl StorageConfig {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.backend == StorageBackend::File && self.path.as_os_str().is_empty() {
            return Err(ValidationError::MissingStoragePath);
        }
        Ok(())
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: StorageBackend::default(),
            path: default_path(),
        }
    }
}

fn default_path() -> PathBuf {
    PathBuf::from("./data/app_state.yaml")
}
