//! CheckAccessHandler - Query handler for the analysis paywall decision.

use crate::application::EntitlementStore;
use crate::domain::entitlement::{resolve_access, AccessDecision};

/// Query to decide whether the analysis feature may be used.
#[derive(Debug, Clone, Copy, Default)]
pub struct CheckAccessQuery;

/// Handler for access checks.
///
/// Fails open: if the entitlement state cannot be read the user is let in
/// with reason `error_fallback`. The first-launch mark is persisted the
/// first time the onboarding paywall is returned.
#[derive(Clone)]
pub struct CheckAccessHandler {
    store: EntitlementStore,
}

impl CheckAccessHandler {
    pub fn new(store: EntitlementStore) -> Self {
        Self { store }
    }

    pub async fn handle(&self, _query: CheckAccessQuery) -> AccessDecision {
        let state = match self.store.load_state().await {
            Ok(state) => state,
            Err(e) => {
                tracing::warn!(error = %e, "failed to read entitlement state, failing open");
                return AccessDecision::error_fallback();
            }
        };

        let resolution = resolve_access(&state);

        if resolution.mark_first_launch {
            if let Err(e) = self.store.mark_first_launch().await {
                tracing::warn!(error = %e, "failed to persist first-launch mark");
            }
        }

        tracing::debug!(
            reason = %resolution.decision.reason,
            has_access = resolution.decision.has_access,
            "access checked"
        );
        resolution.decision
    }
}
