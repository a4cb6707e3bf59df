//! Sliding-window chat history.

use std::collections::VecDeque;

use super::ChatTurn;

/// Turns retained per conversation.
///
/// Also bounds the context sent to the remote chat endpoint on every turn.
pub const MAX_CHAT_TURNS: usize = 10;

/// Bounded, oldest-first list of chat turns.
///
/// Pushing past capacity evicts from the front.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatHistory {
    turns: VecDeque<ChatTurn>,
    capacity: usize,
}

impl ChatHistory {
    /// An empty history; capacity is at least one turn.
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            turns: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn push(&mut self, turn: ChatTurn) {
        self.turns.push_back(turn);
        while self.turns.len() > self.capacity {
            self.turns.pop_front();
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &ChatTurn> {
        self.turns.iter()
    }

    pub fn to_vec(&self) -> Vec<ChatTurn> {
        self.turns.iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn clear(&mut self) {
        self.turns.clear();
    }
}

impl Default for ChatHistory {
    fn default() -> Self {
        Self::with_capacity(MAX_CHAT_TURNS)
    }
}
