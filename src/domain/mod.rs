//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared primitives (ids, timestamps, errors)
//! - `usage` - Free-analysis counter
//! - `entitlement` - Access decisions over premium and trial state
//! - `chat` - Bounded follow-up conversations per landmark
//! - `landmark` - Identified landmark records and reply parsing
//! - `purchase` - Subscription plans and store error classification

pub mod chat;
pub mod entitlement;
pub mod foundation;
pub mod landmark;
pub mod purchase;
pub mod usage;
