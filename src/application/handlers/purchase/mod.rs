//! Purchase handlers.

mod failure;
mod purchase_plan;
mod restore_purchases;

pub use failure::PurchaseFailure;
pub use purchase_plan::{PurchasePlanCommand, PurchasePlanHandler};
pub use restore_purchases::{
    RestorePurchasesCommand, RestorePurchasesHandler, RestoreResult, SyncEntitlementCommand,
    SyncEntitlementHandler, SyncResult,
};
