//! Landmark domain module.
//!
//! The identified landmark record, best-effort parsing of vision replies,
//! and the prompts used with the remote endpoints.

mod info;
mod parser;
mod prompts;

pub use info::{demo_landmark, LandmarkInfo, UNKNOWN_FIELD};
pub use parser::parse_landmark_reply;
pub use prompts::{CHAT_APOLOGY, IDENTIFY_PROMPT};
