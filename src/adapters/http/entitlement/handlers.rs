//! HTTP handlers for usage, access, trial and purchase endpoints.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;

use crate::adapters::http::error::ApiError;
use crate::adapters::http::state::AppState;
use crate::application::handlers::{
    CheckAccessQuery, GetUsageQuery, PurchasePlanCommand, RecordAnalysisCommand,
    ResetAllDataCommand, ResetUsageCommand, RestorePurchasesCommand, StartFreeTrialCommand,
    SyncEntitlementCommand,
};

use super::dto::{
    PurchaseRequest, PurchaseResponse, ResetResponse, RestoreResponse, SyncResponse,
    TrialResponse,
};

/// GET /api/access - Decide whether the user may analyze a photo.
pub async fn check_access(State(state): State<AppState>) -> impl IntoResponse {
    let decision = state.check_access_handler().handle(CheckAccessQuery).await;
    Json(decision)
}

/// GET /api/usage - Current usage record.
pub async fn get_usage(State(state): State<AppState>) -> impl IntoResponse {
    let usage = state.get_usage_handler().handle(GetUsageQuery).await;
    Json(usage)
}

/// POST /api/usage/record - Count one analysis.
pub async fn record_analysis(State(state): State<AppState>) -> impl IntoResponse {
    let result = state.record_analysis_handler().handle(RecordAnalysisCommand).await;
    Json(result)
}

/// POST /api/usage/reset - Drop usage and premium.
pub async fn reset_usage(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    state.reset_usage_handler().handle(ResetUsageCommand).await?;
    Ok(Json(ResetResponse { reset: true }))
}

/// POST /api/account/reset - Drop every persisted key.
pub async fn reset_all_data(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, ApiError> {
    state.reset_all_data_handler().handle(ResetAllDataCommand).await?;
    Ok(Json(ResetResponse { reset: true }))
}

/// POST /api/trial - Start the one-time free trial.
pub async fn start_free_trial(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, ApiError> {
    let result = state.start_free_trial_handler().handle(StartFreeTrialCommand).await?;
    Ok(Json(TrialResponse { result }))
}

/// POST /api/purchases - Buy a plan.
pub async fn purchase(
    State(state): State<AppState>,
    Json(request): Json<PurchaseRequest>,
) -> impl IntoResponse {
    let cmd = PurchasePlanCommand { plan: request.plan };
    let response = match state.purchase_handler().handle(cmd).await {
        Ok(receipt) => PurchaseResponse::Purchased(receipt),
        Err(failure) => PurchaseResponse::Failed(failure),
    };
    Json(response)
}

/// POST /api/purchases/restore - Restore an earlier purchase.
pub async fn restore_purchases(State(state): State<AppState>) -> impl IntoResponse {
    let response = match state.restore_handler().handle(RestorePurchasesCommand).await {
        Ok(result) => RestoreResponse::Completed {
            restored: result.restored,
        },
        Err(failure) => RestoreResponse::Failed(failure),
    };
    Json(response)
}

/// POST /api/purchases/sync - Mirror the store's entitlement locally.
pub async fn sync_entitlement(State(state): State<AppState>) -> impl IntoResponse {
    let response = match state.sync_handler().handle(SyncEntitlementCommand).await {
        Ok(result) => SyncResponse::Completed {
            is_premium: result.is_premium,
        },
        Err(failure) => SyncResponse::Failed(failure),
    };
    Json(response)
}
