//! Restore and sync handlers - Mirror the provider's entitlement locally.

use std::sync::Arc;

use serde::Serialize;

use crate::application::EntitlementStore;
use crate::ports::PurchaseProvider;

use super::PurchaseFailure;

/// Command to restore purchases made on another install.
#[derive(Debug, Clone, Copy, Default)]
pub struct RestorePurchasesCommand;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RestoreResult {
    /// Whether an active entitlement was found.
    pub restored: bool,
}

/// Handler for restoring purchases.
///
/// Only ever grants premium; a restore that finds nothing leaves the
/// local flag alone.
pub struct RestorePurchasesHandler {
    provider: Arc<dyn PurchaseProvider>,
    store: EntitlementStore,
}

impl RestorePurchasesHandler {
    pub fn new(provider: Arc<dyn PurchaseProvider>, store: EntitlementStore) -> Self {
        Self { provider, store }
    }

    pub async fn handle(&self, _cmd: RestorePurchasesCommand) -> Result<RestoreResult, PurchaseFailure> {
        let restored = self.provider.restore().await?;

        if restored {
            if let Err(e) = self.store.set_premium(true).await {
                tracing::warn!(error = %e, "restore succeeded but premium flag not persisted");
            }
        }

        tracing::info!(restored, "purchases restored");
        Ok(RestoreResult { restored })
    }
}

/// Command to re-read the provider's entitlement.
#[derive(Debug, Clone, Copy, Default)]
pub struct SyncEntitlementCommand;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SyncResult {
    pub is_premium: bool,
}

/// Handler that mirrors the provider's entitlement into the premium flag.
///
/// Unlike restore, an inactive entitlement removes the flag.
pub struct SyncEntitlementHandler {
    provider: Arc<dyn PurchaseProvider>,
    store: EntitlementStore,
}

impl SyncEntitlementHandler {
    pub fn new(provider: Arc<dyn PurchaseProvider>, store: EntitlementStore) -> Self {
        Self { provider, store }
    }

    pub async fn handle(&self, _cmd: SyncEntitlementCommand) -> Result<SyncResult, PurchaseFailure> {
        let is_premium = self.provider.is_entitlement_active().await?;

        if let Err(e) = self.store.set_premium(is_premium).await {
            tracing::warn!(error = %e, is_premium, "failed to mirror entitlement");
        }

        tracing::debug!(is_premium, "entitlement synced");
        Ok(SyncResult { is_premium })
    }
}
