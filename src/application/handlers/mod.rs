//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod access;
pub mod chat;
pub mod landmark;
pub mod purchase;
pub mod usage;

mod remote_call;

pub use access::{CheckAccessHandler, CheckAccessQuery, StartFreeTrialCommand, StartFreeTrialHandler, TrialStart};
pub use chat::{
    ChatReply, ChatSessionHandler, ClearChatSessionCommand, GetChatHistoryQuery,
    SendChatMessageCommand, StartChatSessionCommand,
};
pub use landmark::{IdentifyLandmarkCommand, IdentifyLandmarkHandler, IdentifyOutcome};
pub use purchase::{
    PurchaseFailure, PurchasePlanCommand, PurchasePlanHandler, RestorePurchasesCommand,
    RestorePurchasesHandler, RestoreResult, SyncEntitlementCommand, SyncEntitlementHandler,
    SyncResult,
};
pub use usage::{
    GetUsageHandler, GetUsageQuery, RecordAnalysisCommand, RecordAnalysisHandler,
    ResetAllDataCommand, ResetAllDataHandler, ResetUsageCommand, ResetUsageHandler,
};
