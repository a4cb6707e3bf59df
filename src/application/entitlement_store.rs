//! Typed access to the usage record and entitlement flags.
//!
//! Every value lives under its own key in the [`KeyValueStore`]. Flags are
//! stored as `"true"`; an absent key reads as `false`.

use std::sync::Arc;

use crate::domain::entitlement::{EntitlementState, TrialFlags};
use crate::domain::usage::UsageRecord;
use crate::ports::{KeyValueStore, StorageError};

/// Storage keys.
pub mod keys {
    pub const USAGE: &str = "@landmark/usage";
    pub const PREMIUM: &str = "@landmark/premium";
    pub const FIRST_LAUNCH: &str = "@landmark/first_launch";
    pub const FREE_TRIAL_SESSION: &str = "@landmark/free_trial_session";
    pub const FREE_TRIAL_USED: &str = "@landmark/free_trial_used";

    /// Every key this crate writes.
    pub const ALL: [&str; 5] = [USAGE, PREMIUM, FIRST_LAUNCH, FREE_TRIAL_SESSION, FREE_TRIAL_USED];
}

const TRUE: &str = "true";

/// Typed wrapper over the key-value port.
#[derive(Clone)]
pub struct EntitlementStore {
    store: Arc<dyn KeyValueStore>,
    free_quota: i32,
}

impl EntitlementStore {
    pub fn new(store: Arc<dyn KeyValueStore>, free_quota: i32) -> Self {
        Self {
            store,
            free_quota: free_quota.max(0),
        }
    }

    /// Free analyses granted to a fresh install.
    pub fn free_quota(&self) -> i32 {
        self.free_quota
    }

    /// A usage record for an install that has never analysed anything.
    pub fn default_usage(&self) -> UsageRecord {
        UsageRecord::new(self.free_quota)
    }

    pub async fn load_usage(&self) -> Result<Option<UsageRecord>, StorageError> {
        match self.store.get(keys::USAGE).await? {
            Some(json) => serde_json::from_str(&json)
                .map(Some)
                .map_err(|e| StorageError::corrupt(keys::USAGE, e)),
            None => Ok(None),
        }
    }

    /// The persisted usage record, created and persisted when absent.
    ///
    /// Read failures fall back to the fresh defaults; write failures are
    /// logged and the in-memory record is still returned.
    pub async fn usage_or_init(&self) -> UsageRecord {
        match self.load_usage().await {
            Ok(Some(usage)) => usage,
            Ok(None) => {
                let usage = self.default_usage();
                if let Err(e) = self.save_usage(&usage).await {
                    tracing::warn!(error = %e, "failed to persist initial usage record");
                }
                usage
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to read usage record, using defaults");
                self.default_usage()
            }
        }
    }

    pub async fn save_usage(&self, usage: &UsageRecord) -> Result<(), StorageError> {
        let json = serde_json::to_string(usage).map_err(|e| StorageError::write(keys::USAGE, e))?;
        self.store.set(keys::USAGE, &json).await
    }

    pub async fn is_premium(&self) -> Result<bool, StorageError> {
        self.flag(keys::PREMIUM).await
    }

    /// Sets the premium flag, or removes it when `false`.
    pub async fn set_premium(&self, is_premium: bool) -> Result<(), StorageError> {
        self.set_flag(keys::PREMIUM, is_premium).await
    }

    pub async fn trial_flags(&self) -> Result<TrialFlags, StorageError> {
        Ok(TrialFlags {
            first_launch_marked: self.flag(keys::FIRST_LAUNCH).await?,
            free_trial_session_active: self.flag(keys::FREE_TRIAL_SESSION).await?,
            free_trial_ever_used: self.flag(keys::FREE_TRIAL_USED).await?,
        })
    }

    pub async fn mark_first_launch(&self) -> Result<(), StorageError> {
        self.set_flag(keys::FIRST_LAUNCH, true).await
    }

    /// Activates a free-trial session and records that the trial was used.
    pub async fn activate_free_trial(&self) -> Result<(), StorageError> {
        self.set_flag(keys::FREE_TRIAL_SESSION, true).await?;
        self.set_flag(keys::FREE_TRIAL_USED, true).await
    }

    /// Reads every input of the access decision.
    ///
    /// An absent usage record counts as the full free quota.
    pub async fn load_state(&self) -> Result<EntitlementState, StorageError> {
        let is_premium = self.is_premium().await?;
        let trial = self.trial_flags().await?;
        let remaining = self
            .load_usage()
            .await?
            .map(|usage| usage.remaining_free_analyses)
            .unwrap_or(self.free_quota);

        Ok(EntitlementState::fresh(self.free_quota)
            .with_premium(is_premium)
            .with_trial(trial)
            .with_remaining(remaining))
    }

    /// Removes the usage record and the premium flag.
    pub async fn clear_usage(&self) -> Result<(), StorageError> {
        self.store.multi_remove(&[keys::USAGE, keys::PREMIUM]).await
    }

    /// Removes every key, as on logout.
    pub async fn clear_all(&self) -> Result<(), StorageError> {
        self.store.multi_remove(&keys::ALL).await
    }

    async fn flag(&self, key: &str) -> Result<bool, StorageError> {
        Ok(self.store.get(key).await?.as_deref() == Some(TRUE))
    }

    async fn set_flag(&self, key: &str, value: bool) -> Result<(), StorageError> {
        if value {
            self.store.set(key, TRUE).await
        } else {
            self.store.remove(key).await
        }
    }
}
