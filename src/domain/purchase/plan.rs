//! Subscription plans offered on the paywall.

use serde::{Deserialize, Serialize};

/// Premium subscription plan.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubscriptionPlan {
    Monthly,
    /// Discounted yearly plan; the paywall's default selection.
    #[default]
    Annual,
}

impl SubscriptionPlan {
    /// Store product identifier for this plan.
    pub fn product_id(&self) -> &'static str {
        match self {
            SubscriptionPlan::Monthly => "landmark_premium_monthly",
            SubscriptionPlan::Annual => "landmark_premium_annual",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            SubscriptionPlan::Monthly => "Monthly",
            SubscriptionPlan::Annual => "Annual",
        }
    }

    /// Looks a plan up by its store product identifier.
    pub fn from_product_id(product_id: &str) -> Option<Self> {
        [SubscriptionPlan::Monthly, SubscriptionPlan::Annual]
            .into_iter()
            .find(|plan| plan.product_id() == product_id)
    }
}

impl std::fmt::Display for SubscriptionPlan {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
