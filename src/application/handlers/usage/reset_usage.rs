//! Reset handlers - Command handlers that wipe persisted state.

use crate::application::EntitlementStore;
use crate::ports::StorageError;

/// Command to forget usage and premium status.
#[derive(Debug, Clone, Copy, Default)]
pub struct ResetUsageCommand;

/// Handler that removes the usage record and the premium flag.
///
/// Trial and first-launch flags survive.
pub struct ResetUsageHandler {
    store: EntitlementStore,
}

impl ResetUsageHandler {
    pub fn new(store: EntitlementStore) -> Self {
        Self { store }
    }

    pub async fn handle(&self, _cmd: ResetUsageCommand) -> Result<(), StorageError> {
        self.store.clear_usage().await?;
        tracing::info!("usage reset");
        Ok(())
    }
}

/// Command to erase all local state, as on logout.
#[derive(Debug, Clone, Copy, Default)]
pub struct ResetAllDataCommand;

/// Handler that removes usage, premium and every trial flag.
pub struct ResetAllDataHandler {
    store: EntitlementStore,
}

impl ResetAllDataHandler {
    pub fn new(store: EntitlementStore) -> Self {
        Self { store }
    }

    pub async fn handle(&self, _cmd: ResetAllDataCommand) -> Result<(), StorageError> {
        self.store.clear_all().await?;
        tracing::info!("all local data reset");
        Ok(())
    }
}
