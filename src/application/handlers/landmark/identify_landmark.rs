//! IdentifyLandmarkHandler - Command handler for photo identification.

use std::sync::Arc;
use std::time::Duration;

use serde::Serialize;

use crate::application::handlers::access::{CheckAccessHandler, CheckAccessQuery};
use crate::application::handlers::remote_call::with_deadline;
use crate::application::handlers::usage::{RecordAnalysisCommand, RecordAnalysisHandler};
use crate::application::EntitlementStore;
use crate::domain::entitlement::AccessDecision;
use crate::domain::landmark::{demo_landmark, parse_landmark_reply, LandmarkInfo, IDENTIFY_PROMPT};
use crate::ports::{ImagePayload, LandmarkVision, RemoteError};

/// Command to identify the landmark in a photo.
#[derive(Debug, Clone)]
pub struct IdentifyLandmarkCommand {
    pub image: ImagePayload,
}

/// Result of an identification attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum IdentifyOutcome {
    /// Access denied; the caller shows the paywall named in the decision.
    Denied { decision: AccessDecision },
    Identified {
        landmark: LandmarkInfo,
        /// True when `landmark` is the demo payload shown after a failure.
        is_fallback: bool,
        /// Free analyses left after this one. Absent when nothing was
        /// counted: fallbacks, or a refused count after a fail-open check.
        #[serde(skip_serializing_if = "Option::is_none")]
        remaining: Option<i32>,
    },
}

/// Handler for landmark identification.
///
/// Checks access, then races the vision call against `timeout`. A timeout,
/// transport error or unusable reply yields the demo landmark without
/// consuming an analysis.
pub struct IdentifyLandmarkHandler {
    access: CheckAccessHandler,
    usage: RecordAnalysisHandler,
    vision: Arc<dyn LandmarkVision>,
    timeout: Duration,
}

impl IdentifyLandmarkHandler {
    pub fn new(store: EntitlementStore, vision: Arc<dyn LandmarkVision>, timeout: Duration) -> Self {
        Self {
            access: CheckAccessHandler::new(store.clone()),
            usage: RecordAnalysisHandler::new(store),
            vision,
            timeout,
        }
    }

    pub async fn handle(&self, cmd: IdentifyLandmarkCommand) -> IdentifyOutcome {
        let decision = self.access.handle(CheckAccessQuery).await;
        if !decision.has_access {
            return IdentifyOutcome::Denied { decision };
        }

        match self.identify(&cmd.image).await {
            Ok(landmark) => {
                let recorded = self.usage.handle(RecordAnalysisCommand).await;
                tracing::info!(landmark = %landmark.name, "landmark identified");
                IdentifyOutcome::Identified {
                    landmark,
                    is_fallback: false,
                    remaining: recorded.success.then_some(recorded.remaining),
                }
            }
            Err(e) => {
                tracing::warn!(kind = e.kind(), error = %e, "vision call failed, showing demo landmark");
                IdentifyOutcome::Identified {
                    landmark: demo_landmark(),
                    is_fallback: true,
                    remaining: None,
                }
            }
        }
    }

    async fn identify(&self, image: &ImagePayload) -> Result<LandmarkInfo, RemoteError> {
        let reply = with_deadline(self.timeout, self.vision.identify(image, IDENTIFY_PROMPT)).await?;
        parse_landmark_reply(&reply).ok_or_else(|| RemoteError::parse("no landmark found in reply"))
    }
}
