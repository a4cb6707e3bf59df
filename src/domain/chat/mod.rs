//! Chat domain module.
//!
//! Follow-up conversations about an identified landmark.

mod history;
mod store;
mod turn;

pub use history::{ChatHistory, MAX_CHAT_TURNS};
pub use store::ChatSessionStore;
pub use turn::{ChatRole, ChatTurn};
