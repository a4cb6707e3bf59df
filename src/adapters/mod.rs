//! Adapters - Implementations of ports for specific technologies.
//!
//! - `storage` - File-backed and in-memory key-value stores
//! - `ai` - Cloud function client for vision and chat, plus a mock
//! - `purchase` - Simulated store billing
//! - `http` - Axum JSON API

pub mod ai;
pub mod http;
pub mod purchase;
pub mod storage;
