//! Shared state for the HTTP API.

use std::sync::Arc;
use std::time::Duration;

use crate::application::handlers::{
    ChatSessionHandler, CheckAccessHandler, GetUsageHandler, IdentifyLandmarkHandler,
    PurchasePlanHandler, RecordAnalysisHandler, ResetAllDataHandler, ResetUsageHandler,
    RestorePurchasesHandler, StartFreeTrialHandler, SyncEntitlementHandler,
};
use crate::application::EntitlementStore;
use crate::ports::{LandmarkVision, PurchaseProvider};

/// Shared application state containing all dependencies.
///
/// Cloned for each request. Stateless handlers are created on demand; the
/// chat handler owns the in-memory sessions and is shared.
#[derive(Clone)]
pub struct AppState {
    pub store: EntitlementStore,
    pub purchases: Arc<dyn PurchaseProvider>,
    pub vision: Arc<dyn LandmarkVision>,
    pub vision_timeout: Duration,
    pub chat: Arc<ChatSessionHandler>,
}

impl AppState {
    pub fn check_access_handler(&self) -> CheckAccessHandler {
        CheckAccessHandler::new(self.store.clone())
    }

    pub fn start_free_trial_handler(&self) -> StartFreeTrialHandler {
        StartFreeTrialHandler::new(self.store.clone())
    }

    pub fn get_usage_handler(&self) -> GetUsageHandler {
        GetUsageHandler::new(self.store.clone())
    }

    pub fn record_analysis_handler(&self) -> RecordAnalysisHandler {
        RecordAnalysisHandler::new(self.store.clone())
    }

    pub fn reset_usage_handler(&self) -> ResetUsageHandler {
        ResetUsageHandler::new(self.store.clone())
    }

    pub fn reset_all_data_handler(&self) -> ResetAllDataHandler {
        ResetAllDataHandler::new(self.store.clone())
    }

    pub fn purchase_handler(&self) -> PurchasePlanHandler {
        PurchasePlanHandler::new(self.purchases.clone(), self.store.clone())
    }

    pub fn restore_handler(&self) -> RestorePurchasesHandler {
        RestorePurchasesHandler::new(self.purchases.clone(), self.store.clone())
    }

    pub fn sync_handler(&self) -> SyncEntitlementHandler {
        SyncEntitlementHandler::new(self.purchases.clone(), self.store.clone())
    }

    pub fn identify_handler(&self) -> IdentifyLandmarkHandler {
        IdentifyLandmarkHandler::new(self.store.clone(), self.vision.clone(), self.vision_timeout)
    }
}
