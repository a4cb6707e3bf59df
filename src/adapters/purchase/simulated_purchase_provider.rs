//! Simulated purchase provider.
//!
//! Stands in for the store SDK when none is wired: purchases succeed
//! immediately and activate the entitlement. Supports:
//! - Error injection (one-shot store error codes)
//! - Pre-set entitlement state for restore tests
//! - Call tracking

use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::foundation::Timestamp;
use crate::domain::purchase::SubscriptionPlan;
use crate::ports::{PurchaseError, PurchaseProvider, PurchaseReceipt};

/// Simulated in-app purchase provider.
///
/// # Example
///
/// ```ignore
/// let provider = SimulatedPurchaseProvider::new();
///
/// // Inject a store failure for the next call
/// provider.fail_next("E_USER_CANCELLED");
///
/// let result = provider.purchase(SubscriptionPlan::Annual).await;
/// ```
#[derive(Debug, Clone, Default)]
pub struct SimulatedPurchaseProvider {
    inner: Arc<Mutex<SimulatedState>>,
}

#[derive(Debug, Default)]
struct SimulatedState {
    /// Plan of the active entitlement, if any.
    active_plan: Option<SubscriptionPlan>,

    /// Error to return on next call.
    next_error: Option<PurchaseError>,

    /// Track method calls for assertions.
    call_log: Vec<PurchaseCall>,
}

/// Recorded provider call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PurchaseCall {
    IsEntitlementActive,
    Purchase(SubscriptionPlan),
    Restore,
}

impl SimulatedPurchaseProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// A provider whose store account already owns `plan`.
    pub fn with_active_plan(plan: SubscriptionPlan) -> Self {
        let provider = Self::new();
        provider.state().active_plan = Some(plan);
        provider
    }

    /// Fails the next call with the given store error code.
    pub fn fail_next(&self, code: impl Into<String>) {
        let code = code.into();
        let message = format!("simulated store error {}", code);
        self.state().next_error = Some(PurchaseError::new(code, message));
    }

    /// Cancels the active entitlement, as if the subscription lapsed.
    pub fn expire(&self) {
        self.state().active_plan = None;
    }

    pub fn active_plan(&self) -> Option<SubscriptionPlan> {
        self.state().active_plan
    }

    pub fn calls(&self) -> Vec<PurchaseCall> {
        self.state().call_log.clone()
    }

    fn state(&self) -> MutexGuard<'_, SimulatedState> {
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn begin(&self, call: PurchaseCall) -> Result<MutexGuard<'_, SimulatedState>, PurchaseError> {
        let mut state = self.state();
        state.call_log.push(call);
        match state.next_error.take() {
            Some(err) => Err(err),
            None => Ok(state),
        }
    }
}

#[async_trait]
impl PurchaseProvider for SimulatedPurchaseProvider {
    async fn is_entitlement_active(&self) -> Result<bool, PurchaseError> {
        let state = self.begin(PurchaseCall::IsEntitlementActive)?;
        Ok(state.active_plan.is_some())
    }

    async fn purchase(&self, plan: SubscriptionPlan) -> Result<PurchaseReceipt, PurchaseError> {
        let mut state = self.begin(PurchaseCall::Purchase(plan))?;
        state.active_plan = Some(plan);
        Ok(PurchaseReceipt {
            plan,
            transaction_id: format!("sim_{}", Uuid::new_v4().simple()),
            purchased_at: Timestamp::now(),
        })
    }

    async fn restore(&self) -> Result<bool, PurchaseError> {
        let state = self.begin(PurchaseCall::Restore)?;
        Ok(state.active_plan.is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::purchase::PurchaseErrorKind;

    #[tokio::test]
    async fn purchase_activates_entitlement() {
        let provider = SimulatedPurchaseProvider::new();
        assert!(!provider.is_entitlement_active().await.unwrap());

        let receipt = provider.purchase(SubscriptionPlan::Monthly).await.unwrap();

        assert_eq!(receipt.plan, SubscriptionPlan::Monthly);
        assert!(receipt.transaction_id.starts_with("sim_"));
        assert!(provider.is_entitlement_active().await.unwrap());
    }

    #[tokio::test]
    async fn injected_error_is_one_shot() {
        let provider = SimulatedPurchaseProvider::new();
        provider.fail_next("E_NETWORK_ERROR");

        let err = provider.purchase(SubscriptionPlan::Annual).await.unwrap_err();
        assert_eq!(err.kind(), PurchaseErrorKind::Network);
        assert_eq!(provider.active_plan(), None);

        assert!(provider.purchase(SubscriptionPlan::Annual).await.is_ok());
    }

    #[tokio::test]
    async fn restore_reports_existing_plan() {
        let provider = SimulatedPurchaseProvider::with_active_plan(SubscriptionPlan::Annual);
        assert!(provider.restore().await.unwrap());

        provider.expire();
        assert!(!provider.restore().await.unwrap());
    }

    #[tokio::test]
    async fn calls_are_logged() {
        let provider = SimulatedPurchaseProvider::new();
        let _ = provider.restore().await;
        let _ = provider.purchase(SubscriptionPlan::Monthly).await;

        assert_eq!(
            provider.calls(),
            vec![
                PurchaseCall::Restore,
                PurchaseCall::Purchase(SubscriptionPlan::Monthly)
            ]
        );
    }
}
