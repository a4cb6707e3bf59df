//! Persisted entitlement inputs gathered into one value.

use serde::{Deserialize, Serialize};

/// Free-trial and onboarding flags.
///
/// `free_trial_ever_used` is monotonic: once set it only goes back to
/// false through a full data reset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrialFlags {
    /// The onboarding paywall has already been shown once.
    pub first_launch_marked: bool,
    /// The user opted into the free-trial path and it is still running.
    pub free_trial_session_active: bool,
    /// A free trial was started at some point on this install.
    pub free_trial_ever_used: bool,
}

/// Everything the access decision depends on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntitlementState {
    /// Whether a subscription entitlement is active.
    pub is_premium: bool,
    /// Trial and first-launch flags.
    pub trial: TrialFlags,
    /// Free analyses left per the usage record.
    pub remaining_free_analyses: i32,
}

impl EntitlementState {
    /// State of a fresh install with the given free quota.
    pub fn fresh(free_quota: i32) -> Self {
        Self {
            is_premium: false,
            trial: TrialFlags::default(),
            remaining_free_analyses: free_quota,
        }
    }

    pub fn with_premium(mut self, is_premium: bool) -> Self {
        self.is_premium = is_premium;
        self
    }

    pub fn with_trial(mut self, trial: TrialFlags) -> Self {
        self.trial = trial;
        self
    }

    pub fn with_remaining(mut self, remaining: i32) -> Self {
        self.remaining_free_analyses = remaining;
        self
    }
}
