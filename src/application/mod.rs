//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Command handlers write, query handlers read; all of them share the
//! typed [`EntitlementStore`] over the key-value port.

pub mod entitlement_store;
pub mod handlers;

pub use entitlement_store::EntitlementStore;
