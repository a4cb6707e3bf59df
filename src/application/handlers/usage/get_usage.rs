//! GetUsageHandler - Query handler for the usage record.

use crate::application::EntitlementStore;
use crate::domain::usage::UsageRecord;

/// Query for the current usage record.
#[derive(Debug, Clone, Copy, Default)]
pub struct GetUsageQuery;

/// Handler for reading usage.
///
/// Never fails: a missing record is created, an unreadable one is replaced
/// by the defaults for this call.
pub struct GetUsageHandler {
    store: EntitlementStore,
}

impl GetUsageHandler {
    pub fn new(store: EntitlementStore) -> Self {
        Self { store }
    }

    pub async fn handle(&self, _query: GetUsageQuery) -> UsageRecord {
        self.store.usage_or_init().await
    }
}
