//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `KeyValueStore` - Device-local persistent strings (usage, flags)
//! - `LandmarkVision` / `LandmarkChat` - Remote AI cloud functions
//! - `PurchaseProvider` - In-app subscription billing

mod key_value_store;
mod purchase_provider;
mod remote_ai;

pub use key_value_store::{KeyValueStore, StorageError};
pub use purchase_provider::{PurchaseError, PurchaseProvider, PurchaseReceipt};
pub use remote_ai::{
    ChatMessage, ChatRequest, ImagePayload, LandmarkChat, LandmarkVision, RemoteError,
};
