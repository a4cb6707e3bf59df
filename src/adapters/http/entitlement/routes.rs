//! Routes for usage, access, trial and purchase endpoints.

use axum::routing::{get, post};
use axum::Router;

use crate::adapters::http::state::AppState;

use super::handlers::{
    check_access, get_usage, purchase, record_analysis, reset_all_data, reset_usage,
    restore_purchases, start_free_trial, sync_entitlement,
};

/// Entitlement routes, mounted under `/api`.
///
/// - `GET /access`, `POST /trial`
/// - `GET /usage`, `POST /usage/record`, `POST /usage/reset`
/// - `POST /account/reset`
/// - `POST /purchases`, `POST /purchases/restore`, `POST /purchases/sync`
pub fn entitlement_routes() -> Router<AppState> {
    Router::new()
        .route("/access", get(check_access))
        .route("/trial", post(start_free_trial))
        .route("/usage", get(get_usage))
        .route("/usage/record", post(record_analysis))
        .route("/usage/reset", post(reset_usage))
        .route("/account/reset", post(reset_all_data))
        .route("/purchases", post(purchase))
        .route("/purchases/restore", post(restore_purchases))
        .route("/purchases/sync", post(sync_entitlement))
}
