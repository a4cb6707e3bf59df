//! Routes for identification and chat endpoints.

use axum::routing::{delete, get, post};
use axum::Router;

use crate::adapters::http::state::AppState;

use super::handlers::{clear_session, get_history, identify_landmark, send_message, start_session};

/// Landmark routes, mounted under `/api`.
pub fn landmark_routes() -> Router<AppState> {
    Router::new()
        .route("/landmarks/identify", post(identify_landmark))
        .route("/chat/:landmark_id/session", post(start_session))
        .route("/chat/:landmark_id/messages", get(get_history).post(send_message))
        .route("/chat/:landmark_id", delete(clear_session))
}
