//! Access decision for the landmark analysis feature.
//!
//! The decision is a flat, ordered rule list evaluated from scratch on every
//! call. The first matching rule wins:
//!
//! 1. premium entitlement
//! 2. active free-trial session (granted while free analyses remain)
//! 3. first launch (shows the onboarding paywall exactly once)
//! 4. everything else needs access
//!
//! [`resolve_access`] is pure; persisting the first-launch flag is left to the
//! caller through [`Resolution::mark_first_launch`].

use serde::{Deserialize, Serialize};

use super::EntitlementState;

/// Why access was granted or denied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccessReason {
    Premium,
    FreeTrialSession,
    TrialExhausted,
    FirstLaunch,
    NeedsAccess,
    /// Storage could not be read; access granted rather than blocking the app.
    ErrorFallback,
}

impl AccessReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            AccessReason::Premium => "premium",
            AccessReason::FreeTrialSession => "free_trial_session",
            AccessReason::TrialExhausted => "trial_exhausted",
            AccessReason::FirstLaunch => "first_launch",
            AccessReason::NeedsAccess => "needs_access",
            AccessReason::ErrorFallback => "error_fallback",
        }
    }
}

impl std::fmt::Display for AccessReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which paywall variant to present. Only drives UI copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaywallSource {
    Upgrade,
    Onboarding,
}

/// Result of an access check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessDecision {
    pub has_access: bool,
    pub reason: AccessReason,
    pub should_show_paywall: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub paywall_source: Option<PaywallSource>,
}

impl AccessDecision {
    /// Access granted, no paywall.
    pub fn granted(reason: AccessReason) -> Self {
        Self {
            has_access: true,
            reason,
            should_show_paywall: false,
            paywall_source: None,
        }
    }

    /// Access denied, paywall shown from `source`.
    pub fn denied(reason: AccessReason, source: PaywallSource) -> Self {
        Self {
            has_access: false,
            reason,
            should_show_paywall: true,
            paywall_source: Some(source),
        }
    }

    /// Fail-open decision used when entitlement state cannot be read.
    pub fn error_fallback() -> Self {
        Self::granted(AccessReason::ErrorFallback)
    }
}

/// A decision plus the side effect the caller must persist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution {
    pub decision: AccessDecision,
    /// The first-launch flag must be written so the onboarding paywall is one-shot.
    pub mark_first_launch: bool,
}

/// Decides access from the persisted entitlement state.
pub fn resolve_access(state: &EntitlementState) -> Resolution {
    if state.is_premium {
        return no_side_effect(AccessDecision::granted(AccessReason::Premium));
    }

    if state.trial.free_trial_session_active {
        let decision = if state.remaining_free_analyses > 0 {
            AccessDecision::granted(AccessReason::FreeTrialSession)
        } else {
            AccessDecision::denied(AccessReason::TrialExhausted, PaywallSource::Upgrade)
        };
        return no_side_effect(decision);
    }

    if !state.trial.first_launch_marked {
        return Resolution {
            decision: AccessDecision::denied(AccessReason::FirstLaunch, PaywallSource::Onboarding),
            mark_first_launch: true,
        };
    }

    no_side_effect(AccessDecision::denied(
        AccessReason::NeedsAccess,
        PaywallSource::Upgrade,
    ))
}

fn no_side_effect(decision: AccessDecision) -> Resolution {
    Resolution {
        decision,
        mark_first_launch: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entitlement::TrialFlags;

    fn returning_user() -> TrialFlags {
        TrialFlags {
            first_launch_marked: true,
            ..TrialFlags::default()
        }
    }

    fn in_trial() -> TrialFlags {
        TrialFlags {
            first_launch_marked: true,
            free_trial_session_active: true,
            free_trial_ever_used: true,
        }
    }

    #[test]
    fn premium_is_granted() {
        let state = EntitlementState::fresh(3).with_premium(true);
        let resolution = resolve_access(&state);

        assert_eq!(resolution.decision, AccessDecision::granted(AccessReason::Premium));
        assert!(!resolution.mark_first_launch);
    }

    #[test]
    fn premium_dominates_active_trial() {
        let state = EntitlementState::fresh(0)
            .with_premium(true)
            .with_trial(in_trial());

        assert_eq!(resolve_access(&state).decision.reason, AccessReason::Premium);
    }

    #[test]
    fn premium_dominates_first_launch() {
        let state = EntitlementState::fresh(3).with_premium(true);
        let resolution = resolve_access(&state);

        assert_eq!(resolution.decision.reason, AccessReason::Premium);
        assert!(!resolution.mark_first_launch);
    }

    #[test]
    fn active_trial_with_remaining_is_granted() {
        let state = EntitlementState::fresh(2).with_trial(in_trial());
        let decision = resolve_access(&state).decision;

        assert!(decision.has_access);
        assert_eq!(decision.reason, AccessReason::FreeTrialSession);
        assert!(!decision.should_show_paywall);
        assert_eq!(decision.paywall_source, None);
    }

    #[test]
    fn exhausted_trial_shows_upgrade_paywall() {
        let state = EntitlementState::fresh(0).with_trial(in_trial());
        let decision = resolve_access(&state).decision;

        assert_eq!(
            decision,
            AccessDecision::denied(AccessReason::TrialExhausted, PaywallSource::Upgrade)
        );
    }

    #[test]
    fn active_trial_wins_over_first_launch() {
        let trial = TrialFlags {
            first_launch_marked: false,
            free_trial_session_active: true,
            free_trial_ever_used: true,
        };
        let resolution = resolve_access(&EntitlementState::fresh(3).with_trial(trial));

        assert_eq!(resolution.decision.reason, AccessReason::FreeTrialSession);
        assert!(!resolution.mark_first_launch);
    }

    #[test]
    fn first_launch_shows_onboarding_and_requests_mark() {
        let resolution = resolve_access(&EntitlementState::fresh(3));

        assert_eq!(
            resolution.decision,
            AccessDecision::denied(AccessReason::FirstLaunch, PaywallSource::Onboarding)
        );
        assert!(resolution.mark_first_launch);
    }

    #[test]
    fn returning_user_needs_access() {
        let state = EntitlementState::fresh(3).with_trial(returning_user());
        let resolution = resolve_access(&state);

        assert_eq!(
            resolution.decision,
            AccessDecision::denied(AccessReason::NeedsAccess, PaywallSource::Upgrade)
        );
        assert!(!resolution.mark_first_launch);
    }

    #[test]
    fn used_but_inactive_trial_needs_access() {
        let trial = TrialFlags {
            first_launch_marked: true,
            free_trial_session_active: false,
            free_trial_ever_used: true,
        };
        let decision = resolve_access(&EntitlementState::fresh(2).with_trial(trial)).decision;
        assert_eq!(decision.reason, AccessReason::NeedsAccess);
    }

    #[test]
    fn error_fallback_grants_without_paywall() {
        let decision = AccessDecision::error_fallback();
        assert!(decision.has_access);
        assert_eq!(decision.reason, AccessReason::ErrorFallback);
        assert!(!decision.should_show_paywall);
    }

    #[test]
    fn decision_serializes_snake_case() {
        let decision = AccessDecision::denied(AccessReason::FirstLaunch, PaywallSource::Onboarding);
        let json = serde_json::to_value(decision).unwrap();

        assert_eq!(json["has_access"], false);
        assert_eq!(json["reason"], "first_launch");
        assert_eq!(json["should_show_paywall"], true);
        assert_eq!(json["paywall_source"], "onboarding");
    }

    #[test]
    fn granted_decision_omits_paywall_source() {
        let json = serde_json::to_value(AccessDecision::granted(AccessReason::Premium)).unwrap();
        assert!(json.get("paywall_source").is_none());
    }

    #[test]
    fn reason_as_str_matches_serde() {
        for reason in [
            AccessReason::Premium,
            AccessReason::FreeTrialSession,
            AccessReason::TrialExhausted,
            AccessReason::FirstLaunch,
            AccessReason::NeedsAccess,
            AccessReason::ErrorFallback,
        ] {
            let json = serde_json::to_string(&reason).unwrap();
            assert_eq!(json, format!("\"{}\"", reason.as_str()));
        }
    }
}
