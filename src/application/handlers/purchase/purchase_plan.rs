//! PurchasePlanHandler - Command handler for buying a subscription.

use std::sync::Arc;

use crate::application::EntitlementStore;
use crate::domain::purchase::SubscriptionPlan;
use crate::ports::{PurchaseProvider, PurchaseReceipt};

use super::PurchaseFailure;

/// Command to buy a plan.
#[derive(Debug, Clone, Copy)]
pub struct PurchasePlanCommand {
    pub plan: SubscriptionPlan,
}

/// Handler for purchases.
///
/// A confirmed purchase sets the premium flag. If that write fails the
/// purchase still stands; the next entitlement sync repairs the flag.
pub struct PurchasePlanHandler {
    provider: Arc<dyn PurchaseProvider>,
    store: EntitlementStore,
}

impl PurchasePlanHandler {
    pub fn new(provider: Arc<dyn PurchaseProvider>, store: EntitlementStore) -> Self {
        Self { provider, store }
    }

    pub async fn handle(&self, cmd: PurchasePlanCommand) -> Result<PurchaseReceipt, PurchaseFailure> {
        let receipt = self.provider.purchase(cmd.plan).await?;

        if let Err(e) = self.store.set_premium(true).await {
            tracing::warn!(error = %e, "purchase confirmed but premium flag not persisted");
        }

        tracing::info!(
            plan = %receipt.plan,
            transaction_id = %receipt.transaction_id,
            "purchase completed"
        );
        Ok(receipt)
    }
}
