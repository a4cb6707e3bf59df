//! Key-Value Store Port - Local persistent string storage.
//!
//! Usage records and entitlement flags live under independent keys.
//! There are no transactions; concurrent writes to one key are
//! last-write-wins.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, ErrorCode};

/// Errors that can occur during key-value store operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    #[error("Failed to read key {key}: {reason}")]
    Read { key: String, reason: String },

    #[error("Failed to write key {key}: {reason}")]
    Write { key: String, reason: String },

    #[error("Corrupt value under key {key}: {reason}")]
    Corrupt { key: String, reason: String },
}

impl StorageError {
    pub fn read(key: impl Into<String>, reason: impl ToString) -> Self {
        Self::Read {
            key: key.into(),
            reason: reason.to_string(),
        }
    }

    pub fn write(key: impl Into<String>, reason: impl ToString) -> Self {
        Self::Write {
            key: key.into(),
            reason: reason.to_string(),
        }
    }

    pub fn corrupt(key: impl Into<String>, reason: impl ToString) -> Self {
        Self::Corrupt {
            key: key.into(),
            reason: reason.to_string(),
        }
    }

    /// The key the failed operation touched.
    pub fn key(&self) -> &str {
        match self {
            Self::Read { key, .. } | Self::Write { key, .. } | Self::Corrupt { key, .. } => key,
        }
    }
}

impl From<StorageError> for DomainError {
    fn from(err: StorageError) -> Self {
        let key = err.key().to_string();
        DomainError::new(ErrorCode::StorageError, err.to_string()).with_detail("key", key)
    }
}

/// Port for the device-local key-value store
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Reads a value. `Ok(None)` when the key is absent.
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Writes a value, replacing any previous one.
    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Removes a key. Removing an absent key succeeds.
    async fn remove(&self, key: &str) -> Result<(), StorageError>;

    /// Removes several keys in one call.
    async fn multi_remove(&self, keys: &[&str]) -> Result<(), StorageError>;
}
