//! StartFreeTrialHandler - Command handler for the free-trial opt-in.

use serde::Serialize;

use crate::application::EntitlementStore;
use crate::ports::StorageError;

/// Command to start the free trial from the onboarding paywall.
#[derive(Debug, Clone, Copy, Default)]
pub struct StartFreeTrialCommand;

/// Outcome of a free-trial request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TrialStart {
    Started,
    /// A session was already running; flags are re-asserted.
    AlreadyActive,
    /// The trial was used before and has ended. Nothing changes.
    AlreadyUsed,
}

/// Handler for starting the free trial.
///
/// The trial can only be taken once per install: `free_trial_used` is never
/// cleared except by a full data reset.
pub struct StartFreeTrialHandler {
    store: EntitlementStore,
}

impl StartFreeTrialHandler {
    pub fn new(store: EntitlementStore) -> Self {
        Self { store }
    }

    pub async fn handle(&self, _cmd: StartFreeTrialCommand) -> Result<TrialStart, StorageError> {
        let flags = self.store.trial_flags().await?;

        let outcome = if flags.free_trial_session_active {
            TrialStart::AlreadyActive
        } else if flags.free_trial_ever_used {
            tracing::info!("free trial already used");
            return Ok(TrialStart::AlreadyUsed);
        } else {
            TrialStart::Started
        };

        self.store.activate_free_trial().await?;
        tracing::info!(?outcome, "free trial session active");
        Ok(outcome)
    }
}
