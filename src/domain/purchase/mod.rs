//! Purchase domain module.
//!
//! Subscription plans and the classification of store failures.

mod error_kind;
mod plan;

pub use error_kind::PurchaseErrorKind;
pub use plan::SubscriptionPlan;
