//! Landmark chat handlers.

mod chat_session;

pub use chat_session::{
    ChatReply, ChatSessionHandler, ClearChatSessionCommand, GetChatHistoryQuery,
    SendChatMessageCommand, StartChatSessionCommand,
};
