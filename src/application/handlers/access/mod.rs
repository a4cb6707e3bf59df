//! Entitlement handlers.

mod check_access;
mod start_free_trial;

pub use check_access::{CheckAccessHandler, CheckAccessQuery};
pub use start_free_trial::{StartFreeTrialCommand, StartFreeTrialHandler, TrialStart};
