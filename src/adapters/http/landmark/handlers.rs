//! HTTP handlers for identification and chat endpoints.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use crate::adapters::http::error::ApiError;
use crate::adapters::http::state::AppState;
use crate::application::handlers::{
    ClearChatSessionCommand, GetChatHistoryQuery, IdentifyLandmarkCommand,
    SendChatMessageCommand, StartChatSessionCommand,
};
use crate::domain::foundation::LandmarkId;
use crate::ports::ImagePayload;

use super::dto::{ChatHistoryResponse, ChatSessionResponse, IdentifyRequest, SendMessageRequest};

/// POST /api/landmarks/identify
///
/// Denied access and demo fallbacks are both 200 responses; only a
/// malformed image is rejected.
pub async fn identify_landmark(
    State(state): State<AppState>,
    Json(request): Json<IdentifyRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let image = ImagePayload::from_base64(request.image_base64, request.mime_type)?;
    let outcome = state
        .identify_handler()
        .handle(IdentifyLandmarkCommand { image })
        .await;
    Ok(Json(outcome))
}

/// POST /api/chat/:landmark_id/session
pub async fn start_session(
    State(state): State<AppState>,
    Path(landmark_id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let landmark_id = LandmarkId::new(landmark_id)?;
    let landmark_id = state
        .chat
        .start_session(StartChatSessionCommand { landmark_id })
        .await;
    Ok((StatusCode::CREATED, Json(ChatSessionResponse { landmark_id })))
}

/// GET /api/chat/:landmark_id/messages
pub async fn get_history(
    State(state): State<AppState>,
    Path(landmark_id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let landmark_id = LandmarkId::new(landmark_id)?;
    let messages = state
        .chat
        .history(GetChatHistoryQuery {
            landmark_id: landmark_id.clone(),
        })
        .await;
    Ok(Json(ChatHistoryResponse {
        landmark_id,
        messages,
    }))
}

/// POST /api/chat/:landmark_id/messages
pub async fn send_message(
    State(state): State<AppState>,
    Path(landmark_id): Path<String>,
    Json(request): Json<SendMessageRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let cmd = SendChatMessageCommand {
        landmark_id: LandmarkId::new(landmark_id)?,
        landmark: request.landmark,
        content: request.content,
    };
    let reply = state.chat.send_message(cmd).await?;
    Ok(Json(reply))
}

/// DELETE /api/chat/:landmark_id
pub async fn clear_session(
    State(state): State<AppState>,
    Path(landmark_id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let landmark_id = LandmarkId::new(landmark_id)?;
    state
        .chat
        .clear_session(ClearChatSessionCommand { landmark_id })
        .await;
    Ok(StatusCode::NO_CONTENT)
}
