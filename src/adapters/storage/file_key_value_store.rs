//! File-based Key-Value Store Adapter
//!
//! Persists the whole store as a single YAML mapping. Every write rewrites
//! the file through a temporary sibling and a rename, so a crash mid-write
//! leaves the previous snapshot intact. A write over an unparseable file
//! starts from an empty snapshot, so a reset always repairs the store.

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::sync::Mutex;

use crate::ports::{KeyValueStore, StorageError};

type Snapshot = BTreeMap<String, String>;

/// File-backed key-value store
#[derive(Debug)]
pub struct FileKeyValueStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl FileKeyValueStore {
    /// Create a store backed by the given YAML file
    ///
    /// The file and its parent directory are created on first write.
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn load(&self, key: &str) -> Result<Snapshot, StorageError> {
        let yaml = match fs::read_to_string(&self.path).await {
            Ok(yaml) => yaml,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Snapshot::new()),
            Err(e) => return Err(StorageError::read(key, e)),
        };

        if yaml.trim().is_empty() {
            return Ok(Snapshot::new());
        }

        serde_yaml::from_str(&yaml).map_err(|e| StorageError::corrupt(key, e))
    }

    async fn persist(&self, key: &str, snapshot: &Snapshot) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| StorageError::write(key, e))?;
        }

        let yaml = serde_yaml::to_string(snapshot).map_err(|e| StorageError::write(key, e))?;

        let tmp_path = self.path.with_extension("yaml.tmp");
        fs::write(&tmp_path, yaml)
            .await
            .map_err(|e| StorageError::write(key, e))?;
        fs::rename(&tmp_path, &self.path)
            .await
            .map_err(|e| StorageError::write(key, e))
    }

    async fn update<F>(&self, key: &str, mutate: F) -> Result<(), StorageError>
    where
        F: FnOnce(&mut Snapshot) + Send,
    {
        let _guard = self.write_lock.lock().await;
        let mut snapshot = match self.load(key).await {
            Ok(snapshot) => snapshot,
            Err(StorageError::Corrupt { reason, .. }) => {
                tracing::warn!(
                    path = %self.path.display(),
                    key,
                    error = %reason,
                    "state file is corrupt, rewriting from empty"
                );
                Snapshot::new()
            }
            Err(e) => return Err(e),
        };
        mutate(&mut snapshot);
        self.persist(key, &snapshot).await
    }
}

#[async_trait]
impl KeyValueStore for FileKeyValueStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.load(key).await?.remove(key))
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.update(key, |snapshot| {
            snapshot.insert(key.to_string(), value.to_string());
        })
        .await
    }

    async fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.update(key, |snapshot| {
            snapshot.remove(key);
        })
        .await
    }

    async fn multi_remove(&self, keys: &[&str]) -> Result<(), StorageError> {
        let label = keys.first().copied().unwrap_or_default();
        self.update(label, |snapshot| {
            for key in keys {
                snapshot.remove(*key);
            }
        })
        .await
    }
}
