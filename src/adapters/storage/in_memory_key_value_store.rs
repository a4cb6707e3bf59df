//! In-Memory Key-Value Store Adapter
//!
//! Keeps values in a shared map. Used for development and tests; failure
//! injection lets tests exercise the fail-open paths.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::ports::{KeyValueStore, StorageError};

/// In-memory key-value store
#[derive(Debug, Clone, Default)]
pub struct InMemoryKeyValueStore {
    values: Arc<RwLock<HashMap<String, String>>>,
    fail_reads: Arc<AtomicBool>,
    fail_writes: Arc<AtomicBool>,
}

impl InMemoryKeyValueStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every subsequent read fail until reset.
    pub fn set_fail_reads(&self, fail: bool) {
        self.fail_reads.store(fail, Ordering::SeqCst);
    }

    /// Makes every subsequent write or remove fail until reset.
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    /// Number of stored keys
    pub async fn len(&self) -> usize {
        self.values.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.values.read().await.is_empty()
    }

    /// Clear all stored data (useful for tests)
    pub async fn clear(&self) {
        self.values.write().await.clear();
    }

    fn check_read(&self, key: &str) -> Result<(), StorageError> {
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(StorageError::read(key, "injected read failure"));
        }
        Ok(())
    }

    fn check_write(&self, key: &str) -> Result<(), StorageError> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(StorageError::write(key, "injected write failure"));
        }
        Ok(())
    }
}

#[async_trait]
impl KeyValueStore for InMemoryKeyValueStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.check_read(key)?;
        Ok(self.values.read().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.check_write(key)?;
        self.values
            .write()
            .await
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.check_write(key)?;
        self.values.write().await.remove(key);
        Ok(())
    }

    async fn multi_remove(&self, keys: &[&str]) -> Result<(), StorageError> {
        if let Some(first) = keys.first() {
            self.check_write(first)?;
        }
        let mut values = self.values.write().await;
        for key in keys {
            values.remove(*key);
        }
        Ok(())
    }
}
