//! Mock landmark AI for testing.
//!
//! Implements both remote ports so tests run without the cloud functions.
//!
//! # Features
//!
//! - Queued replies, consumed in order
//! - Simulated delays for timeout testing
//! - Error injection for fallback testing
//! - Call tracking for verification
//!
//! # Example
//!
//! ```ignore
//! let ai = MockLandmarkAI::new()
//!     .with_reply(r#"{"name": "Big Ben"}"#)
//!     .with_delay(Duration::from_millis(100));
//!
//! let text = ai.identify(&image, IDENTIFY_PROMPT).await?;
//! ```

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;
use tokio::time::sleep;

use crate::ports::{ChatRequest, ImagePayload, LandmarkChat, LandmarkVision, RemoteError};

/// Reply returned when the queue is empty.
pub const DEFAULT_MOCK_REPLY: &str = "Mock reply";

/// One recorded call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MockCall {
    Identify { mime_type: String, prompt: String },
    Chat(ChatRequest),
}

/// Mock remote AI.
#[derive(Debug, Clone, Default)]
pub struct MockLandmarkAI {
    replies: Arc<Mutex<VecDeque<Result<String, RemoteError>>>>,
    delay: Duration,
    calls: Arc<Mutex<Vec<MockCall>>>,
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

impl MockLandmarkAI {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a successful reply.
    pub fn with_reply(self, text: impl Into<String>) -> Self {
        lock(&self.replies).push_back(Ok(text.into()));
        self
    }

    /// Queues an error.
    pub fn with_error(self, error: RemoteError) -> Self {
        lock(&self.replies).push_back(Err(error));
        self
    }

    /// Sets simulated latency per request.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn call_count(&self) -> usize {
        lock(&self.calls).len()
    }

    pub fn calls(&self) -> Vec<MockCall> {
        lock(&self.calls).clone()
    }

    /// Chat requests only, in call order.
    pub fn chat_requests(&self) -> Vec<ChatRequest> {
        lock(&self.calls)
            .iter()
            .filter_map(|call| match call {
                MockCall::Chat(request) => Some(request.clone()),
                MockCall::Identify { .. } => None,
            })
            .collect()
    }

    async fn respond(&self, call: MockCall) -> Result<String, RemoteError> {
        lock(&self.calls).push(call);

        if !self.delay.is_zero() {
            sleep(self.delay).await;
        }

        let next = lock(&self.replies).pop_front();
        next.unwrap_or_else(|| Ok(DEFAULT_MOCK_REPLY.to_string()))
    }
}

#[async_trait]
impl LandmarkVision for MockLandmarkAI {
    async fn identify(&self, image: &ImagePayload, prompt: &str) -> Result<String, RemoteError> {
        self.respond(MockCall::Identify {
            mime_type: image.mime_type().to_string(),
            prompt: prompt.to_string(),
        })
        .await
    }
}

#[async_trait]
impl LandmarkChat for MockLandmarkAI {
    async fn reply(&self, request: &ChatRequest) -> Result<String, RemoteError> {
        self.respond(MockCall::Chat(request.clone())).await
    }
}
