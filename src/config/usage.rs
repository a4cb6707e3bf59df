//! Usage limits

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::chat::MAX_CHAT_TURNS;
use crate::domain::usage::FREE_ANALYSIS_QUOTA;

/// Free quota and chat retention
#[derive(Debug, Clone, Deserialize)]
pub struct UsageConfig {
    /// Free analyses granted to a fresh install
    #[serde(default = "default_free_quota")]
    pub free_analysis_quota: i32,

    /// Chat turns retained per landmark
    #[serde(default = "default_chat_history_limit")]
    pub chat_history_limit: usize,
}

impl UsageConfig {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.free_analysis_quota < 0 {
            return Err(ValidationError::InvalidFreeQuota);
        }
        if self.chat_history_limit == 0 {
            return Err(ValidationError::InvalidChatHistoryLimit);
        }
        Ok(())
    }
}

impl Default for UsageConfig {
    fn default() -> Self {
        Self {
            free_analysis_quota: default_free_quota(),
            chat_history_limit: default_chat_history_limit(),
        }
    }
}

fn default_free_quota() -> i32 {
    FREE_ANALYSIS_QUOTA
}

fn default_chat_history_limit() -> usize {
    MAX_CHAT_TURNS
}
