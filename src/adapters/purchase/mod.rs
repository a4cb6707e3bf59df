//! Purchase adapters.

mod simulated_purchase_provider;

pub use simulated_purchase_provider::{PurchaseCall, SimulatedPurchaseProvider};
