//! HTTP DTOs for usage, access, trial and purchase endpoints.

use serde::{Deserialize, Serialize};

use crate::application::handlers::{PurchaseFailure, TrialStart};
use crate::domain::purchase::SubscriptionPlan;
use crate::ports::PurchaseReceipt;

// ════════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Request to buy a subscription plan.
#[derive(Debug, Clone, Deserialize)]
pub struct PurchaseRequest {
    /// `monthly` or `annual`; annual when omitted.
    #[serde(default)]
    pub plan: SubscriptionPlan,
}

// ════════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Response for a free-trial request.
#[derive(Debug, Clone, Serialize)]
pub struct TrialResponse {
    pub result: TrialStart,
}

/// Response for a purchase. Store failures are a normal outcome, not an HTTP error.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum PurchaseResponse {
    Purchased(PurchaseReceipt),
    Failed(PurchaseFailure),
}

/// Response for a restore.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum RestoreResponse {
    Completed { restored: bool },
    Failed(PurchaseFailure),
}

/// Response for an entitlement sync.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SyncResponse {
    Completed { is_premium: bool },
    Failed(PurchaseFailure),
}

/// Response for a reset.
#[derive(Debug, Clone, Serialize)]
pub struct ResetResponse {
    pub reset: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::Timestamp;
    use crate::domain::purchase::PurchaseErrorKind;

    #[test]
    fn purchase_request_defaults_to_annual() {
        let request: PurchaseRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(request.plan, SubscriptionPlan::Annual);
    }

    #[test]
    fn purchase_response_is_tagged() {
        let receipt = PurchaseReceipt {
            plan: SubscriptionPlan::Monthly,
            transaction_id: "sim_1".to_string(),
            purchased_at: Timestamp::from_unix_secs(0),
        };
        let json = serde_json::to_value(PurchaseResponse::Purchased(receipt)).unwrap();

        assert_eq!(json["status"], "purchased");
        assert_eq!(json["plan"], "monthly");
        assert_eq!(json["transaction_id"], "sim_1");
    }

    #[test]
    fn failure_carries_kind() {
        let failure = PurchaseFailure {
            kind: PurchaseErrorKind::Cancelled,
            code: "E_USER_CANCELLED".to_string(),
            message: "cancelled".to_string(),
        };
        let json = serde_json::to_value(RestoreResponse::Failed(failure)).unwrap();

        assert_eq!(json["status"], "failed");
        assert_eq!(json["kind"], "cancelled");
    }
}
