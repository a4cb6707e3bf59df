//! In-process chat sessions keyed by landmark.

use std::collections::HashMap;

use crate::domain::foundation::LandmarkId;

use super::{ChatHistory, ChatRole, ChatTurn, MAX_CHAT_TURNS};

/// Ephemeral chat histories, one per landmark.
///
/// Owned by the component driving the chat screen. Nothing here is
/// persisted; a restart starts every conversation over.
#[derive(Debug, Clone)]
pub struct ChatSessionStore {
    sessions: HashMap<LandmarkId, ChatHistory>,
    turn_limit: usize,
}

impl ChatSessionStore {
    pub fn new() -> Self {
        Self::with_turn_limit(MAX_CHAT_TURNS)
    }

    pub fn with_turn_limit(turn_limit: usize) -> Self {
        Self {
            sessions: HashMap::new(),
            turn_limit: turn_limit.max(1),
        }
    }

    /// Starts a fresh conversation, dropping any earlier turns.
    ///
    /// The landmark id is the session handle.
    pub fn start_session(&mut self, landmark_id: &LandmarkId) -> LandmarkId {
        self.sessions.insert(
            landmark_id.clone(),
            ChatHistory::with_capacity(self.turn_limit),
        );
        landmark_id.clone()
    }

    pub fn append_message(
        &mut self,
        landmark_id: &LandmarkId,
        role: ChatRole,
        content: impl Into<String>,
    ) {
        self.append_turn(landmark_id, ChatTurn::new(role, content));
    }

    pub fn append_turn(&mut self, landmark_id: &LandmarkId, turn: ChatTurn) {
        let turn_limit = self.turn_limit;
        self.sessions
            .entry(landmark_id.clone())
            .or_insert_with(|| ChatHistory::with_capacity(turn_limit))
            .push(turn);
    }

    /// Retained turns, oldest first. Empty for unknown landmarks.
    pub fn history(&self, landmark_id: &LandmarkId) -> Vec<ChatTurn> {
        self.sessions
            .get(landmark_id)
            .map(ChatHistory::to_vec)
            .unwrap_or_default()
    }

    pub fn clear_session(&mut self, landmark_id: &LandmarkId) {
        self.sessions.remove(landmark_id);
    }

    pub fn has_session(&self, landmark_id: &LandmarkId) -> bool {
        self.sessions.contains_key(landmark_id)
    }

    pub fn session_count(&self) -> usize {
        self.sessions.len()
    }

    pub fn turn_limit(&self) -> usize {
        self.turn_limit
    }
}

impl Default for ChatSessionStore {
    fn default() -> Self {
        Self::new()
    }
}
