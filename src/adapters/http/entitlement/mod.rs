//! Entitlement HTTP adapter.

pub mod dto;
pub mod handlers;
mod routes;

pub use routes::entitlement_routes;
