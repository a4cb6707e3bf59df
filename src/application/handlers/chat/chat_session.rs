//! ChatSessionHandler - Commands and queries for landmark chat.
//!
//! The session store is in-memory and owned here; every operation goes
//! through one lock, which is never held across the remote call.

use std::sync::Arc;
use std::time::Duration;

use serde::Serialize;
use tokio::sync::Mutex;

use crate::application::handlers::remote_call::with_deadline;
use crate::domain::chat::{ChatRole, ChatSessionStore, ChatTurn};
use crate::domain::foundation::{LandmarkId, ValidationError};
use crate::domain::landmark::CHAT_APOLOGY;
use crate::ports::{ChatRequest, LandmarkChat};

/// Command to start (or restart) a conversation about a landmark.
#[derive(Debug, Clone)]
pub struct StartChatSessionCommand {
    pub landmark_id: LandmarkId,
}

/// Query for the retained turns of a conversation.
#[derive(Debug, Clone)]
pub struct GetChatHistoryQuery {
    pub landmark_id: LandmarkId,
}

/// Command to discard a conversation.
#[derive(Debug, Clone)]
pub struct ClearChatSessionCommand {
    pub landmark_id: LandmarkId,
}

/// Command to ask a follow-up question.
#[derive(Debug, Clone)]
pub struct SendChatMessageCommand {
    pub landmark_id: LandmarkId,
    /// Landmark context sent with the question, e.g. `LandmarkInfo::chat_context`.
    pub landmark: String,
    pub content: String,
}

/// Assistant reply to a chat message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatReply {
    pub content: String,
    /// True when `content` is the apology shown after a failure.
    pub is_fallback: bool,
}

/// Handler owning the chat session store.
pub struct ChatSessionHandler {
    sessions: Mutex<ChatSessionStore>,
    chat: Arc<dyn LandmarkChat>,
    timeout: Duration,
}

impl ChatSessionHandler {
    pub fn new(chat: Arc<dyn LandmarkChat>, timeout: Duration, turn_limit: usize) -> Self {
        Self {
            sessions: Mutex::new(ChatSessionStore::with_turn_limit(turn_limit)),
            chat,
            timeout,
        }
    }

    /// Clears prior history; the landmark id doubles as the session handle.
    pub async fn start_session(&self, cmd: StartChatSessionCommand) -> LandmarkId {
        let session = self.sessions.lock().await.start_session(&cmd.landmark_id);
        tracing::debug!(landmark_id = %session, "chat session started");
        session
    }

    pub async fn history(&self, query: GetChatHistoryQuery) -> Vec<ChatTurn> {
        self.sessions.lock().await.history(&query.landmark_id)
    }

    pub async fn clear_session(&self, cmd: ClearChatSessionCommand) {
        self.sessions.lock().await.clear_session(&cmd.landmark_id);
        tracing::debug!(landmark_id = %cmd.landmark_id, "chat session cleared");
    }

    /// Sends a question with the retained history.
    ///
    /// The user turn is always stored. The assistant turn is stored only on
    /// success; failures return the apology, which is not stored.
    pub async fn send_message(&self, cmd: SendChatMessageCommand) -> Result<ChatReply, ValidationError> {
        let content = cmd.content.trim();
        if content.is_empty() {
            return Err(ValidationError::empty_field("content"));
        }

        let request = {
            let mut sessions = self.sessions.lock().await;
            let prior = sessions.history(&cmd.landmark_id);
            sessions.append_message(&cmd.landmark_id, ChatRole::User, content);
            ChatRequest::new(cmd.landmark.clone(), content).with_history(&prior)
        };

        match with_deadline(self.timeout, self.chat.reply(&request)).await {
            Ok(reply) if !reply.trim().is_empty() => {
                let reply = reply.trim().to_string();
                self.sessions
                    .lock()
                    .await
                    .append_message(&cmd.landmark_id, ChatRole::Assistant, reply.clone());
                tracing::debug!(
                    landmark_id = %cmd.landmark_id,
                    history_len = request.history.len(),
                    "chat reply received"
                );
                Ok(ChatReply {
                    content: reply,
                    is_fallback: false,
                })
            }
            Ok(_) => Ok(self.apologize(&cmd.landmark_id, "empty reply")),
            Err(e) => Ok(self.apologize(&cmd.landmark_id, &e.to_string())),
        }
    }

    fn apologize(&self, landmark_id: &LandmarkId, reason: &str) -> ChatReply {
        tracing::warn!(landmark_id = %landmark_id, reason, "chat call failed");
        ChatReply {
            content: CHAT_APOLOGY.to_string(),
            is_fallback: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::ai::MockLandmarkAI;
    use crate::domain::chat::MAX_CHAT_TURNS;
    use crate::ports::RemoteError;

    // ════════════════════════════════════════════════════════════════════════════
    // Test Helpers
    // ════════════════════════════════════════════════════════════════════════════

    fn id(s: &str) -> LandmarkId {
        LandmarkId::new(s).unwrap()
    }

    fn handler(ai: &MockLandmarkAI) -> ChatSessionHandler {
        ChatSessionHandler::new(Arc::new(ai.clone()), Duration::from_secs(30), MAX_CHAT_TURNS)
    }

    fn message(landmark: &str, content: &str) -> SendChatMessageCommand {
        SendChatMessageCommand {
            landmark_id: id(landmark),
            landmark: format!("Landmark: {landmark}"),
            content: content.to_string(),
        }
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Session Lifecycle
    // ════════════════════════════════════════════════════════════════════════════

    #[tokio::test]
    async fn start_session_returns_id_and_clears_history() {
        let ai = MockLandmarkAI::new().with_reply("Built in 1889.");
        let handler = handler(&ai);
        handler.send_message(message("eiffel", "When?")).await.unwrap();

        let session = handler
            .start_session(StartChatSessionCommand { landmark_id: id("eiffel") })
            .await;

        assert_eq!(session, id("eiffel"));
        let history = handler
            .history(GetChatHistoryQuery { landmark_id: id("eiffel") })
            .await;
        assert!(history.is_empty());
    }

    #[tokio::test]
    async fn clear_session_discards_turns() {
        let ai = MockLandmarkAI::new();
        let handler = handler(&ai);
        handler.send_message(message("louvre", "Hi")).await.unwrap();

        handler
            .clear_session(ClearChatSessionCommand { landmark_id: id("louvre") })
            .await;

        assert!(handler
            .history(GetChatHistoryQuery { landmark_id: id("louvre") })
            .await
            .is_empty());
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Sending
    // ════════════════════════════════════════════════════════════════════════════

    #[tokio::test]
    async fn successful_reply_stores_both_turns() {
        let ai = MockLandmarkAI::new().with_reply("  Gustave Eiffel's company.  ");
        let handler = handler(&ai);

        let reply = handler.send_message(message("eiffel", "Who built it?")).await.unwrap();

        assert_eq!(reply.content, "Gustave Eiffel's company.");
        assert!(!reply.is_fallback);
        let history = handler
            .history(GetChatHistoryQuery { landmark_id: id("eiffel") })
            .await;
        assert_eq!(history.len(), 2);
        assert_eq!(history[0].role, ChatRole::User);
        assert_eq!(history[1].role, ChatRole::Assistant);
    }

    #[tokio::test]
    async fn request_carries_prior_history_and_context() {
        let ai = MockLandmarkAI::new().with_reply("one").with_reply("two");
        let handler = handler(&ai);

        handler.send_message(message("colosseum", "first")).await.unwrap();
        handler.send_message(message("colosseum", "second")).await.unwrap();

        let requests = ai.chat_requests();
        assert!(requests[0].history.is_empty());
        assert_eq!(requests[1].history.len(), 2);
        assert_eq!(requests[1].history[0].content, "first");
        assert_eq!(requests[1].history[1].content, "one");
        assert_eq!(requests[1].message, "second");
        assert_eq!(requests[1].landmark, "Landmark: colosseum");
    }

    #[tokio::test]
    async fn history_sent_is_bounded() {
        let ai = MockLandmarkAI::new();
        let handler = handler(&ai);

        for n in 0..8 {
            handler
                .send_message(message("petra", &format!("question {n}")))
                .await
                .unwrap();
        }

        let requests = ai.chat_requests();
        assert!(requests.iter().all(|r| r.history.len() <= MAX_CHAT_TURNS));
        let history = handler
            .history(GetChatHistoryQuery { landmark_id: id("petra") })
            .await;
        assert_eq!(history.len(), MAX_CHAT_TURNS);
        assert_eq!(history.last().map(|t| t.content.as_str()), Some(crate::adapters::ai::DEFAULT_MOCK_REPLY));
    }

    #[tokio::test]
    async fn failure_returns_apology_without_storing_it() {
        let ai = MockLandmarkAI::new().with_error(RemoteError::network("offline"));
        let handler = handler(&ai);

        let reply = handler.send_message(message("pisa", "Why does it lean?")).await.unwrap();

        assert_eq!(reply.content, CHAT_APOLOGY);
        assert!(reply.is_fallback);
        let history = handler
            .history(GetChatHistoryQuery { landmark_id: id("pisa") })
            .await;
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].role, ChatRole::User);
    }

    #[tokio::test(start_paused = true)]
    async fn timeout_returns_apology() {
        let ai = MockLandmarkAI::new()
            .with_reply("too late")
            .with_delay(Duration::from_secs(120));
        let handler = handler(&ai);

        let reply = handler.send_message(message("pisa", "Hello?")).await.unwrap();

        assert!(reply.is_fallback);
    }

    #[tokio::test]
    async fn blank_reply_returns_apology() {
        let ai = MockLandmarkAI::new().with_reply("   ");
        let handler = handler(&ai);

        let reply = handler.send_message(message("pisa", "Hello?")).await.unwrap();

        assert!(reply.is_fallback);
    }

    #[tokio::test]
    async fn empty_message_is_rejected() {
        let ai = MockLandmarkAI::new();
        let handler = handler(&ai);

        let err = handler.send_message(message("pisa", "   ")).await.unwrap_err();

        assert_eq!(err.field(), "content");
        assert_eq!(ai.call_count(), 0);
    }
}
