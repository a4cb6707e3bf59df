//! RecordAnalysisHandler - Command handler that counts one analysis.

use crate::application::EntitlementStore;
use crate::domain::foundation::Timestamp;
use crate::domain::usage::RecordAnalysisResult;

/// Command to count one completed analysis.
#[derive(Debug, Clone, Copy, Default)]
pub struct RecordAnalysisCommand;

/// Handler for recording analyses.
///
/// Premium installs only bump the counter. Otherwise one free analysis is
/// consumed, or the call is refused with no mutation once none are left.
#[derive(Clone)]
pub struct RecordAnalysisHandler {
    store: EntitlementStore,
}

impl RecordAnalysisHandler {
    pub fn new(store: EntitlementStore) -> Self {
        Self { store }
    }

    pub async fn handle(&self, _cmd: RecordAnalysisCommand) -> RecordAnalysisResult {
        let is_premium = self.store.is_premium().await.unwrap_or_else(|e| {
            tracing::warn!(error = %e, "failed to read premium flag, treating as free");
            false
        });

        let mut usage = self.store.usage_or_init().await;
        let now = Timestamp::now();
        let result = if is_premium {
            usage.record_premium_analysis(now)
        } else {
            usage.record_free_analysis(now)
        };

        if !result.success {
            tracing::debug!("free analyses exhausted");
            return result;
        }

        if let Err(e) = self.store.save_usage(&usage).await {
            tracing::warn!(error = %e, "failed to persist usage record");
        }

        tracing::info!(
            analysis_count = usage.analysis_count,
            remaining = result.remaining,
            "analysis recorded"
        );
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::InMemoryKeyValueStore;
    use crate::domain::usage::{UsageRecord, UNLIMITED_ANALYSES};
    use proptest::prelude::*;
    use std::sync::Arc;

    // ════════════════════════════════════════════════════════════════════════════
    // Test Helpers
    // ════════════════════════════════════════════════════════════════════════════

    fn setup(quota: i32) -> (InMemoryKeyValueStore, EntitlementStore, RecordAnalysisHandler) {
        let kv = InMemoryKeyValueStore::new();
        let store = EntitlementStore::new(Arc::new(kv.clone()), quota);
        let handler = RecordAnalysisHandler::new(store.clone());
        (kv, store, handler)
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Free Tier
    // ════════════════════════════════════════════════════════════════════════════

    #[tokio::test]
    async fn consumes_free_analyses_until_exhausted() {
        let (_, store, handler) = setup(3);

        assert_eq!(handler.handle(RecordAnalysisCommand).await, RecordAnalysisResult::consumed(2));
        assert_eq!(handler.handle(RecordAnalysisCommand).await, RecordAnalysisResult::consumed(1));
        assert_eq!(handler.handle(RecordAnalysisCommand).await, RecordAnalysisResult::consumed(0));
        assert_eq!(handler.handle(RecordAnalysisCommand).await, RecordAnalysisResult::exhausted());

        let usage = store.load_usage().await.unwrap().unwrap();
        assert_eq!(usage.analysis_count, 3);
        assert_eq!(usage.remaining_free_analyses, 0);
    }

    #[tokio::test]
    async fn last_free_analysis_then_refusal() {
        let (_, store, handler) = setup(3);
        let mut usage = UsageRecord::new(3);
        usage.remaining_free_analyses = 1;
        store.save_usage(&usage).await.unwrap();

        let first = handler.handle(RecordAnalysisCommand).await;
        let second = handler.handle(RecordAnalysisCommand).await;

        assert_eq!(first, RecordAnalysisResult { success: true, remaining: 0 });
        assert_eq!(second, RecordAnalysisResult { success: false, remaining: 0 });
    }

    #[tokio::test]
    async fn refusal_does_not_mutate_record() {
        let (_, store, handler) = setup(0);
        let before = store.usage_or_init().await;

        handler.handle(RecordAnalysisCommand).await;

        assert_eq!(store.load_usage().await.unwrap().unwrap(), before);
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Premium
    // ════════════════════════════════════════════════════════════════════════════

    #[tokio::test]
    async fn premium_only_increments_count() {
        let (_, store, handler) = setup(3);
        store.set_premium(true).await.unwrap();

        for _ in 0..5 {
            let result = handler.handle(RecordAnalysisCommand).await;
            assert_eq!(result, RecordAnalysisResult { success: true, remaining: UNLIMITED_ANALYSES });
        }

        let usage = store.load_usage().await.unwrap().unwrap();
        assert_eq!(usage.analysis_count, 5);
        assert_eq!(usage.remaining_free_analyses, 3);
        assert!(usage.last_usage_date.is_some());
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Storage Failures
    // ════════════════════════════════════════════════════════════════════════════

    #[tokio::test]
    async fn write_failure_is_not_surfaced() {
        let (kv, _, handler) = setup(3);
        kv.set_fail_writes(true);

        let result = handler.handle(RecordAnalysisCommand).await;

        assert_eq!(result, RecordAnalysisResult::consumed(2));
    }

    #[tokio::test]
    async fn read_failure_uses_defaults() {
        let (kv, _, handler) = setup(3);
        kv.set_fail_reads(true);

        let result = handler.handle(RecordAnalysisCommand).await;

        assert_eq!(result, RecordAnalysisResult::consumed(2));
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Properties
    // ════════════════════════════════════════════════════════════════════════════

    proptest! {
        #[test]
        fn remaining_is_non_increasing_and_never_negative(quota in 0i32..6, calls in 0usize..12) {
            let runtime = tokio::runtime::Builder::new_current_thread().build().unwrap();
            runtime.block_on(async {
                let (_, _, handler) = setup(quota);
                let mut previous = quota;
                let mut failures = 0;

                for _ in 0..calls {
                    let result = handler.handle(RecordAnalysisCommand).await;
                    prop_assert!(result.remaining >= 0);
                    prop_assert!(result.remaining <= previous);
                    if !result.success {
                        failures += 1;
                        prop_assert_eq!(result.remaining, 0);
                    }
                    previous = result.remaining;
                }

                let expected_failures = calls.saturating_sub(quota as usize);
                prop_assert_eq!(failures, expected_failures);
                Ok(())
            })?;
        }
    }
}
