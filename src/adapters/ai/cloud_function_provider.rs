//! Cloud Function Provider - Client for the Gemini-proxying cloud functions.
//!
//! One client serves both endpoints: the vision function receives
//! `{ image, mimeType, prompt }` and the chat function receives
//! `{ landmark, history, message }`. Replies are either the raw Gemini
//! shape (`candidates[0].content.parts[*].text`) or a flattened `{ text }`.
//!
//! # Configuration
//!
//! ```ignore
//! let config = CloudFunctionConfig::new(vision_url, chat_url)
//!     .with_api_key(api_key)
//!     .with_timeout(Duration::from_secs(30));
//!
//! let provider = CloudFunctionProvider::new(config)?;
//! ```

use async_trait::async_trait;
use reqwest::{Client, Response};
use secrecy::{ExposeSecret, Secret};
use serde::Serialize;
use serde_json::Value;
use std::time::Duration;
use uuid::Uuid;

use crate::ports::{
    ChatRequest, ImagePayload, LandmarkChat, LandmarkVision, RemoteError,
};

/// Header carrying the optional shared secret for the cloud functions.
const API_KEY_HEADER: &str = "x-api-key";

/// Header correlating a request with the function's logs.
const REQUEST_ID_HEADER: &str = "x-request-id";

/// Configuration for the cloud function client.
#[derive(Debug, Clone)]
pub struct CloudFunctionConfig {
    pub vision_url: String,
    pub chat_url: String,
    api_key: Option<Secret<String>>,
    /// Transport-level timeout; the application layer races its own timer too.
    pub timeout: Duration,
}

impl CloudFunctionConfig {
    pub fn new(vision_url: impl Into<String>, chat_url: impl Into<String>) -> Self {
        Self {
            vision_url: vision_url.into(),
            chat_url: chat_url.into(),
            api_key: None,
            timeout: Duration::from_secs(30),
        }
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(Secret::new(api_key.into()));
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    fn api_key(&self) -> Option<&str> {
        self.api_key.as_ref().map(|key| key.expose_secret().as_str())
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct VisionBody<'a> {
    image: &'a str,
    mime_type: &'a str,
    prompt: &'a str,
}

/// HTTP client for the vision and chat cloud functions.
pub struct CloudFunctionProvider {
    config: CloudFunctionConfig,
    client: Client,
}

impl CloudFunctionProvider {
    pub fn new(config: CloudFunctionConfig) -> Result<Self, RemoteError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| RemoteError::network(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { config, client })
    }

    async fn post<B: Serialize + ?Sized>(&self, url: &str, body: &B) -> Result<String, RemoteError> {
        let request_id = Uuid::new_v4();
        tracing::debug!(%request_id, url, "calling cloud function");

        let mut request = self
            .client
            .post(url)
            .header(REQUEST_ID_HEADER, request_id.to_string())
            .json(body);
        if let Some(key) = self.config.api_key() {
            request = request.header(API_KEY_HEADER, key);
        }

        let response = request.send().await.map_err(|e| {
            if e.is_timeout() {
                RemoteError::timeout(self.config.timeout.as_secs())
            } else if e.is_connect() {
                RemoteError::network(format!("Connection failed: {}", e))
            } else {
                RemoteError::network(e.to_string())
            }
        })?;

        let response = handle_response_status(response).await?;
        let raw = response
            .text()
            .await
            .map_err(|e| RemoteError::network(e.to_string()))?;

        let text = extract_reply_text(&raw).ok_or(RemoteError::EmptyResponse)?;
        tracing::debug!(%request_id, reply_len = text.len(), "cloud function replied");
        Ok(text)
    }
}

async fn handle_response_status(response: Response) -> Result<Response, RemoteError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response
        .text()
        .await
        .unwrap_or_else(|_| "Unknown error".to_string());
    Err(RemoteError::status(status.as_u16(), body))
}

/// Pulls the reply text out of a function response body.
///
/// Accepts the Gemini candidate shape, a `{ text }` object, a bare JSON
/// string, or a non-JSON body taken verbatim. Blank text yields `None`.
pub fn extract_reply_text(raw: &str) -> Option<String> {
    let text = match serde_json::from_str::<Value>(raw) {
        Ok(Value::Object(body)) => {
            if let Some(parts) = body
                .get("candidates")
                .and_then(|c| c.get(0))
                .and_then(|c| c.get("content"))
                .and_then(|c| c.get("parts"))
                .and_then(Value::as_array)
            {
                parts
                    .iter()
                    .filter_map(|p| p.get("text").and_then(Value::as_str))
                    .collect::<Vec<_>>()
                    .join("")
            } else {
                ["text", "reply", "response"]
                    .iter()
                    .find_map(|k| body.get(*k).and_then(Value::as_str))
                    .unwrap_or_default()
                    .to_string()
            }
        }
        Ok(Value::String(s)) => s,
        Ok(_) => String::new(),
        Err(_) => raw.to_string(),
    };

    let trimmed = text.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

#[async_trait]
impl LandmarkVision for CloudFunctionProvider {
    async fn identify(&self, image: &ImagePayload, prompt: &str) -> Result<String, RemoteError> {
        let body = VisionBody {
            image: image.base64(),
            mime_type: image.mime_type(),
            prompt,
        };
        self.post(&self.config.vision_url, &body).await
    }
}

#[async_trait]
impl LandmarkChat for CloudFunctionProvider {
    async fn reply(&self, request: &ChatRequest) -> Result<String, RemoteError> {
        self.post(&self.config.chat_url, request).await
    }
}
