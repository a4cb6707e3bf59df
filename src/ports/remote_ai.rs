//! Remote AI Ports - Vision and chat cloud functions.
//!
//! Both endpoints are thin proxies in front of a hosted model. The
//! application layer races every call against a timer and substitutes a
//! fallback on any error, so implementations never retry.

use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::{Deserialize, Serialize};

use crate::domain::chat::{ChatRole, ChatTurn};
use crate::domain::foundation::ValidationError;

/// Photo to identify, base64-encoded for the wire.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImagePayload {
    base64: String,
    mime_type: String,
}

impl ImagePayload {
    /// Encodes raw image bytes.
    pub fn from_bytes(bytes: &[u8], mime_type: impl Into<String>) -> Result<Self, ValidationError> {
        if bytes.is_empty() {
            return Err(ValidationError::empty_field("image"));
        }
        Ok(Self {
            base64: STANDARD.encode(bytes),
            mime_type: normalize_mime(mime_type.into())?,
        })
    }

    /// Accepts an already-encoded image after checking it decodes.
    pub fn from_base64(
        encoded: impl Into<String>,
        mime_type: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let encoded = encoded.into();
        let trimmed = encoded.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::empty_field("image_base64"));
        }
        STANDARD
            .decode(trimmed)
            .map_err(|e| ValidationError::invalid_format("image_base64", e.to_string()))?;
        Ok(Self {
            base64: trimmed.to_string(),
            mime_type: normalize_mime(mime_type.into())?,
        })
    }

    pub fn base64(&self) -> &str {
        &self.base64
    }

    pub fn mime_type(&self) -> &str {
        &self.mime_type
    }
}

fn normalize_mime(mime_type: String) -> Result<String, ValidationError> {
    let mime = mime_type.trim().to_ascii_lowercase();
    if mime.is_empty() {
        return Ok("image/jpeg".to_string());
    }
    if !mime.starts_with("image/") {
        return Err(ValidationError::invalid_format(
            "mime_type",
            format!("expected an image type, got {mime}"),
        ));
    }
    Ok(mime)
}

/// One prior turn as sent to the chat endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub content: String,
}

impl From<&ChatTurn> for ChatMessage {
    fn from(turn: &ChatTurn) -> Self {
        Self {
            role: turn.role,
            content: turn.content.clone(),
        }
    }
}

/// Request to the chat endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatRequest {
    /// Landmark context the conversation is about.
    pub landmark: String,
    /// Retained turns before `message`, oldest first.
    pub history: Vec<ChatMessage>,
    pub message: String,
}

impl ChatRequest {
    pub fn new(landmark: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            landmark: landmark.into(),
            history: Vec::new(),
            message: message.into(),
        }
    }

    pub fn with_history<'a>(mut self, turns: impl IntoIterator<Item = &'a ChatTurn>) -> Self {
        self.history = turns.into_iter().map(ChatMessage::from).collect();
        self
    }
}

/// Port for the landmark identification endpoint
#[async_trait]
pub trait LandmarkVision: Send + Sync {
    /// Sends the image and prompt; returns the model's raw reply text.
    async fn identify(&self, image: &ImagePayload, prompt: &str) -> Result<String, RemoteError>;
}

/// Port for the landmark chat endpoint
#[async_trait]
pub trait LandmarkChat: Send + Sync {
    /// Returns the assistant's reply text.
    async fn reply(&self, request: &ChatRequest) -> Result<String, RemoteError>;
}

/// Remote endpoint errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RemoteError {
    /// No response before the client-side deadline.
    #[error("request timed out after {timeout_secs}s")]
    Timeout { timeout_secs: u64 },

    #[error("network error: {0}")]
    Network(String),

    /// Non-success HTTP status.
    #[error("endpoint returned {status}: {body}")]
    Status { status: u16, body: String },

    /// Success status but no text in the body.
    #[error("endpoint returned an empty response")]
    EmptyResponse,

    #[error("parse error: {0}")]
    Parse(String),
}

impl RemoteError {
    pub fn timeout(timeout_secs: u64) -> Self {
        Self::Timeout { timeout_secs }
    }

    pub fn network(message: impl Into<String>) -> Self {
        Self::Network(message.into())
    }

    pub fn status(status: u16, body: impl Into<String>) -> Self {
        Self::Status {
            status,
            body: body.into(),
        }
    }

    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse(message.into())
    }

    /// Short label for logs and metrics fields.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Timeout { .. } => "timeout",
            Self::Network(_) => "network",
            Self::Status { .. } => "status",
            Self::EmptyResponse => "empty_response",
            Self::Parse(_) => "parse",
        }
    }
}
