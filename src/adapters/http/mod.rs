//! HTTP adapter - local JSON API over the application handlers.
//!
//! Each area has its own dto/handlers/routes module; [`api_router`] nests
//! them under `/api` and adds `/health`.

pub mod entitlement;
pub mod error;
pub mod landmark;
mod state;

use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;

pub use error::{ApiError, ErrorResponse};
pub use state::AppState;

#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Builds the complete API router with state applied.
pub fn api_router(state: AppState) -> Router {
    let api = Router::new()
        .merge(entitlement::entitlement_routes())
        .merge(landmark::landmark_routes());

    Router::new()
        .route("/health", get(health))
        .nest("/api", api)
        .with_state(state)
}
