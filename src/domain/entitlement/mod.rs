//! Entitlement domain module.
//!
//! Decides whether the landmark analysis feature may be used and, if not,
//! which paywall to show.
//!
//! # Module Structure
//!
//! - `state` - EntitlementState and TrialFlags, the persisted inputs
//! - `decision` - AccessDecision and the pure `resolve_access` rule list

mod decision;
mod state;

pub use decision::{resolve_access, AccessDecision, AccessReason, PaywallSource, Resolution};
pub use state::{EntitlementState, TrialFlags};
