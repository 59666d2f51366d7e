use std::sync::Arc;
use tracing::{error, info, warn};

use domain::tag::{RawFieldInput, SubmissionRequest, TagKind};
use domain::{EngagementSdk, SdkError, ValidationError};

const SENT_MESSAGE: &str = "Tag sent to server.";
const FAILED_MESSAGE: &str = "Cannot send tag to server, please check console log.";

/// Result of one tag button press
#[derive(Debug, Clone, PartialEq)]
pub enum SubmissionOutcome {
    /// Input was invalid, the SDK was not contacted
    Rejected(ValidationError),
    Sent(SubmissionRequest),
    Failed {
        request: SubmissionRequest,
        error: SdkError,
    },
}

impl SubmissionOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Sent(_))
    }

    /// Text for the dialog shown after the press
    pub fn dialog_message(&self) -> String {
        match self {
            Self::Rejected(err) => err.to_string(),
            Self::Sent(_) => SENT_MESSAGE.to_string(),
            Self::Failed { .. } => FAILED_MESSAGE.to_string(),
        }
    }
}

/// Validates tag input and hands valid requests to the SDK
#[derive(Clone)]
pub struct TagSubmitter {
    sdk: Arc<dyn EngagementSdk>,
}

impl TagSubmitter {
    pub fn new(sdk: Arc<dyn EngagementSdk>) -> Self {
        Self { sdk }
    }

    pub async fn submit(&self, kind: TagKind, input: &RawFieldInput) -> SubmissionOutcome {
        let request = match input.validate(kind) {
            Ok(request) => request,
            Err(e) => {
                warn!(kind = %kind, field = e.field(), "⚠️ Tag input rejected: {}", e);
                return SubmissionOutcome::Rejected(e);
            }
        };

        self.send(request).await
    }

    /// Dispatch an already validated request. No retry.
    pub async fn send(&self, request: SubmissionRequest) -> SubmissionOutcome {
        let kind = request.kind();
        match request.dispatch(self.sdk.as_ref()).await {
            Ok(()) => {
                info!(kind = %kind, key = ?request.key(), "✅ Tag sent");
                SubmissionOutcome::Sent(request)
            }
            Err(e) => {
                error!(kind = %kind, key = ?request.key(), error = %e, "❌ Failed to send tag");
                SubmissionOutcome::Failed { request, error: e }
            }
        }
    }
}
