//! HTTP DTOs for identification and chat endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::chat::ChatTurn;
use crate::domain::foundation::LandmarkId;

/// Request to identify the landmark in a photo.
#[derive(Debug, Clone, Deserialize)]
pub struct IdentifyRequest {
    /// Photo bytes, standard base64.
    pub image_base64: String,
    /// Photo MIME type; `image/jpeg` when omitted.
    #[serde(default)]
    pub mime_type: String,
}

/// Request to ask a follow-up question.
#[derive(Debug, Clone, Deserialize)]
pub struct SendMessageRequest {
    /// Context describing the landmark being discussed.
    #[serde(default)]
    pub landmark: String,
    pub content: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChatSessionResponse {
    pub landmark_id: LandmarkId,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChatHistoryResponse {
    pub landmark_id: LandmarkId,
    pub messages: Vec<ChatTurn>,
}
