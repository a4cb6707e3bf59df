//! Storage Adapters
//!
//! Implementations of the KeyValueStore port.
//!
//! ## Available Adapters
//!
//! - **FileKeyValueStore** - Persists every key in one YAML file on disk
//! - **InMemoryKeyValueStore** - Keeps values in memory (testing/development)
//!
//! ## Usage
//!
//! ```ignore
//! use adapters::storage::{FileKeyValueStore, InMemoryKeyValueStore};
//!
//! // Production: file-based storage
//! let store = FileKeyValueStore::new("./data/app_state.yaml");
//!
//! // Testing: in-memory storage
//! let store = InMemoryKeyValueStore::new();
//! ```

mod file_key_value_store;
mod in_memory_key_value_store;

pub use file_key_value_store::FileKeyValueStore;
pub use in_memory_key_value_store::InMemoryKeyValueStore;
