//! Landmark identification handler.

mod identify_landmark;

pub use identify_landmark::{IdentifyLandmarkCommand, IdentifyLandmarkHandler, IdentifyOutcome};
