//! Prompts sent to the remote vision and chat endpoints.

/// Instruction sent alongside the photo to the vision endpoint.
pub const IDENTIFY_PROMPT: &str = "Identify the landmark in this photo. \
Respond with a single JSON object and nothing else, using these keys: \
\"name\", \"description\", \"location\", \"yearBuilt\", \"architecture\", \
\"significance\" and \"funFacts\" (an array of three short strings). \
If the photo does not show a recognizable landmark, set \"name\" to \"Unknown landmark\" \
and explain what you see in \"description\".";

/// Reply shown when the chat endpoint fails or times out.
pub const CHAT_APOLOGY: &str =
    "Sorry, I couldn't answer that right now. Please check your connection and try again.";
