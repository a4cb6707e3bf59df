//! Usage counter handlers.

mod get_usage;
mod record_analysis;
mod reset_usage;

pub use get_usage::{GetUsageHandler, GetUsageQuery};
pub use record_analysis::{RecordAnalysisCommand, RecordAnalysisHandler};
pub use reset_usage::{ResetAllDataCommand, ResetAllDataHandler, ResetUsageCommand, ResetUsageHandler};
