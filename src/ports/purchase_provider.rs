//! Purchase Provider Port - Store billing abstraction.
//!
//! The provider owns receipts and entitlements; this crate only mirrors
//! "is premium active" into a local flag.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::Timestamp;
use crate::domain::purchase::{PurchaseErrorKind, SubscriptionPlan};

/// Confirmation of a completed purchase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PurchaseReceipt {
    pub plan: SubscriptionPlan,
    pub transaction_id: String,
    pub purchased_at: Timestamp,
}

/// Store failure carrying the provider's raw error code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{code}: {message}")]
pub struct PurchaseError {
    pub code: String,
    pub message: String,
}

impl PurchaseError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }

    /// Category of this failure for display.
    pub fn kind(&self) -> PurchaseErrorKind {
        PurchaseErrorKind::from_code(&self.code)
    }
}

/// Port for the in-app purchase provider
#[async_trait]
pub trait PurchaseProvider: Send + Sync {
    /// Whether the premium entitlement is currently active.
    async fn is_entitlement_active(&self) -> Result<bool, PurchaseError>;

    /// Runs the purchase flow for a plan.
    async fn purchase(&self, plan: SubscriptionPlan) -> Result<PurchaseReceipt, PurchaseError>;

    /// Restores previous purchases; returns whether premium is active afterwards.
    async fn restore(&self) -> Result<bool, PurchaseError>;
}
