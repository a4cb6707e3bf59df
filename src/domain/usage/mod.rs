//! Usage domain module.
//!
//! Tracks how many analyses were performed and how many free ones remain.

mod record;

pub use record::{RecordAnalysisResult, UsageRecord, FREE_ANALYSIS_QUOTA, UNLIMITED_ANALYSES};
