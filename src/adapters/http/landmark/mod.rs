//! Landmark identification and chat HTTP adapter.

pub mod dto;
pub mod handlers;
mod routes;

pub use routes::landmark_routes;
