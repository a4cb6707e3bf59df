//! User-facing view of a store failure.

use serde::Serialize;

use crate::domain::purchase::PurchaseErrorKind;
use crate::ports::PurchaseError;

/// A classified store failure, ready to display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PurchaseFailure {
    pub kind: PurchaseErrorKind,
    /// Raw provider code, kept for support logs.
    pub code: String,
    pub message: String,
}

impl From<PurchaseError> for PurchaseFailure {
    fn from(err: PurchaseError) -> Self {
        let kind = err.kind();
        if kind.is_user_initiated() {
            tracing::info!(code = %err.code, "purchase cancelled by user");
        } else {
            tracing::warn!(code = %err.code, %kind, error = %err.message, "store call failed");
        }

        Self {
            kind,
            code: err.code,
            message: kind.user_message().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_and_uses_display_message() {
        let failure = PurchaseFailure::from(PurchaseError::new("E_ITEM_UNAVAILABLE", "sku gone"));

        assert_eq!(failure.kind, PurchaseErrorKind::NotAvailable);
        assert_eq!(failure.code, "E_ITEM_UNAVAILABLE");
        assert_eq!(failure.message, PurchaseErrorKind::NotAvailable.user_message());
    }

    #[test]
    fn unknown_code_is_unknown_kind() {
        let failure = PurchaseFailure::from(PurchaseError::new("E_WHATEVER", "?"));
        assert_eq!(failure.kind, PurchaseErrorKind::Unknown);
    }
}
