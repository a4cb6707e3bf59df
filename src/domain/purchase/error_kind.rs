//! Classification of store purchase failures.

use serde::{Deserialize, Serialize};

/// User-displayable category of a failed purchase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PurchaseErrorKind {
    Cancelled,
    Pending,
    NotAvailable,
    NotAllowed,
    Invalid,
    Network,
    Unknown,
}

impl PurchaseErrorKind {
    /// Classifies a store error code.
    ///
    /// Matching is case-insensitive and accepts both the `E_`-prefixed IAP
    /// codes and the bare billing names. Unrecognized codes are `Unknown`.
    pub fn from_code(code: &str) -> Self {
        match code.trim().to_ascii_uppercase().as_str() {
            "E_USER_CANCELLED" | "USER_CANCELLED" | "CANCELLED" => Self::Cancelled,
            "E_DEFERRED_PAYMENT" | "E_PENDING" | "PENDING" => Self::Pending,
            "E_ITEM_UNAVAILABLE" | "E_NOT_PREPARED" | "ITEM_UNAVAILABLE"
            | "BILLING_UNAVAILABLE" => Self::NotAvailable,
            "E_NOT_ALLOWED" | "E_USER_ERROR" | "PURCHASE_NOT_ALLOWED" => Self::NotAllowed,
            "E_DEVELOPER_ERROR" | "E_INVALID_PRODUCT" | "E_ALREADY_OWNED" | "INVALID" => {
                Self::Invalid
            }
            "E_NETWORK_ERROR" | "E_REMOTE_ERROR" | "E_SERVICE_ERROR" | "NETWORK_ERROR" => {
                Self::Network
            }
            _ => Self::Unknown,
        }
    }

    /// Message shown to the user for this category.
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::Cancelled => "Purchase cancelled.",
            Self::Pending => "Your purchase is pending approval. Premium unlocks once it completes.",
            Self::NotAvailable => "This subscription is not available right now. Please try again later.",
            Self::NotAllowed => "Purchases are not allowed on this device.",
            Self::Invalid => "This purchase could not be processed. Please contact support.",
            Self::Network => "Network error. Check your connection and try again.",
            Self::Unknown => "Something went wrong with your purchase. Please try again.",
        }
    }

    /// True when the user backed out of the purchase sheet.
    pub fn is_user_initiated(&self) -> bool {
        matches!(self, Self::Cancelled)
    }
}

impl std::fmt::Display for PurchaseErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Cancelled => "cancelled",
            Self::Pending => "pending",
            Self::NotAvailable => "not_available",
            Self::NotAllowed => "not_allowed",
            Self::Invalid => "invalid",
            Self::Network => "network",
            Self::Unknown => "unknown",
        };
        write!(f, "{}", s)
    }
}
