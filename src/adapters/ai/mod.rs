//! AI Adapters - Clients for the remote vision and chat endpoints.
//!
//! - `CloudFunctionProvider` - reqwest client for the Gemini-proxying cloud functions
//! - `MockLandmarkAI` - Configurable mock for testing

mod cloud_function_provider;
mod mock_landmark_ai;

pub use cloud_function_provider::{extract_reply_text, CloudFunctionConfig, CloudFunctionProvider};
pub use mock_landmark_ai::{MockCall, MockLandmarkAI, DEFAULT_MOCK_REPLY};
