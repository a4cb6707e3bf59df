//! Persisted analysis usage and the counting rules applied to it.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::Timestamp;

/// Free analyses granted to a fresh install.
pub const FREE_ANALYSIS_QUOTA: i32 = 3;

/// Sentinel reported as `remaining` for premium users.
pub const UNLIMITED_ANALYSES: i32 = -1;

/// Analysis usage for this device.
///
/// `remaining_free_analyses` is either [`UNLIMITED_ANALYSES`] or non-negative.
/// It only ever moves down through [`UsageRecord::record_free_analysis`],
/// which refuses to decrement past zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsageRecord {
    /// Total analyses performed, free or premium.
    pub analysis_count: u32,
    /// Free analyses left before the paywall.
    pub remaining_free_analyses: i32,
    /// When the record was first created.
    pub first_usage_date: Timestamp,
    /// When the last analysis was recorded.
    pub last_usage_date: Option<Timestamp>,
}

impl UsageRecord {
    /// A fresh record with the given free quota, created now.
    pub fn new(free_quota: i32) -> Self {
        Self::starting_at(free_quota, Timestamp::now())
    }

    /// A fresh record with an explicit creation time.
    pub fn starting_at(free_quota: i32, now: Timestamp) -> Self {
        Self {
            analysis_count: 0,
            remaining_free_analyses: free_quota.max(0),
            first_usage_date: now,
            last_usage_date: None,
        }
    }

    /// True when at least one free analysis is left.
    pub fn has_free_analyses(&self) -> bool {
        self.remaining_free_analyses > 0
    }

    /// Counts an analysis made under a premium entitlement.
    ///
    /// The free quota is left untouched.
    pub fn record_premium_analysis(&mut self, now: Timestamp) -> RecordAnalysisResult {
        self.analysis_count = self.analysis_count.saturating_add(1);
        self.last_usage_date = Some(now);
        RecordAnalysisResult::unlimited()
    }

    /// Consumes one free analysis if any is left.
    ///
    /// When the quota is exhausted the record is not mutated.
    pub fn record_free_analysis(&mut self, now: Timestamp) -> RecordAnalysisResult {
        if !self.has_free_analyses() {
            return RecordAnalysisResult::exhausted();
        }

        self.remaining_free_analyses -= 1;
        self.analysis_count = self.analysis_count.saturating_add(1);
        self.last_usage_date = Some(now);
        RecordAnalysisResult::consumed(self.remaining_free_analyses)
    }
}

/// Outcome of recording one analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordAnalysisResult {
    /// Whether the analysis was counted.
    pub success: bool,
    /// Free analyses left, or [`UNLIMITED_ANALYSES`] for premium.
    pub remaining: i32,
}

impl RecordAnalysisResult {
    /// Premium analysis, no quota applies.
    pub fn unlimited() -> Self {
        Self {
            success: true,
            remaining: UNLIMITED_ANALYSES,
        }
    }

    /// A free analysis was consumed.
    pub fn consumed(remaining: i32) -> Self {
        Self {
            success: true,
            remaining,
        }
    }

    /// No free analysis was left.
    pub fn exhausted() -> Self {
        Self {
            success: false,
            remaining: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn t(secs: i64) -> Timestamp {
        Timestamp::from_unix_secs(secs)
    }

    #[test]
    fn new_record_has_full_quota() {
        let record = UsageRecord::starting_at(FREE_ANALYSIS_QUOTA, t(100));
        assert_eq!(record.analysis_count, 0);
        assert_eq!(record.remaining_free_analyses, 3);
        assert_eq!(record.first_usage_date, t(100));
        assert!(record.last_usage_date.is_none());
    }

    #[test]
    fn negative_quota_is_clamped_to_zero() {
        let record = UsageRecord::starting_at(-5, t(0));
        assert_eq!(record.remaining_free_analyses, 0);
        assert!(!record.has_free_analyses());
    }

    #[test]
    fn free_analysis_decrements_and_counts() {
        let mut record = UsageRecord::starting_at(3, t(0));
        let result = record.record_free_analysis(t(50));

        assert_eq!(result, RecordAnalysisResult { success: true, remaining: 2 });
        assert_eq!(record.analysis_count, 1);
        assert_eq!(record.remaining_free_analyses, 2);
        assert_eq!(record.last_usage_date, Some(t(50)));
    }

    #[test]
    fn last_free_analysis_then_exhausted() {
        let mut record = UsageRecord::starting_at(1, t(0));

        let first = record.record_free_analysis(t(10));
        assert_eq!(first, RecordAnalysisResult { success: true, remaining: 0 });

        let snapshot = record.clone();
        let second = record.record_free_analysis(t(20));
        assert_eq!(second, RecordAnalysisResult { success: false, remaining: 0 });
        assert_eq!(record, snapshot);
    }

    #[test]
    fn premium_analysis_keeps_quota() {
        let mut record = UsageRecord::starting_at(2, t(0));
        let result = record.record_premium_analysis(t(30));

        assert_eq!(result, RecordAnalysisResult { success: true, remaining: -1 });
        assert_eq!(record.analysis_count, 1);
        assert_eq!(record.remaining_free_analyses, 2);
        assert_eq!(record.last_usage_date, Some(t(30)));
    }

    #[test]
    fn serializes_with_camel_case_keys() {
        let record = UsageRecord::starting_at(3, t(0));
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["analysisCount"], 0);
        assert_eq!(json["remainingFreeAnalyses"], 3);
        assert!(json.get("firstUsageDate").is_some());
        assert!(json["lastUsageDate"].is_null());
    }

    proptest! {
        #[test]
        fn free_quota_is_monotonic_and_non_negative(quota in 0i32..10, calls in 0usize..30) {
            let mut record = UsageRecord::starting_at(quota, t(0));
            let mut previous = record.remaining_free_analyses;
            let mut failures = 0usize;

            for i in 0..calls {
                let before = record.clone();
                let result = record.record_free_analysis(t(i as i64 + 1));

                prop_assert!(record.remaining_free_analyses >= 0);
                prop_assert!(record.remaining_free_analyses <= previous);
                if !result.success {
                    failures += 1;
                    prop_assert_eq!(result.remaining, 0);
                    prop_assert_eq!(&record, &before);
                }
                previous = record.remaining_free_analyses;
            }

            let successes = calls.min(quota as usize);
            prop_assert_eq!(record.analysis_count as usize, successes);
            prop_assert_eq!(failures, calls - successes);
        }
    }
}
