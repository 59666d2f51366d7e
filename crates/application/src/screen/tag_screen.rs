use std::sync::Arc;

use domain::EngagementSdk;
use domain::tag::{RawFieldInput, TagKind};

use super::{DemoScreen, Screen};
use crate::tag::{SubmissionOutcome, TagSubmitter};

/// One button per tag kind
pub struct TagScreen {
    submitter: TagSubmitter,
}

impl TagScreen {
    pub fn new(sdk: Arc<dyn EngagementSdk>) -> Self {
        Self {
            submitter: TagSubmitter::new(sdk),
        }
    }

    pub async fn press(&self, kind: TagKind, input: &RawFieldInput) -> SubmissionOutcome {
        self.submitter.submit(kind, input).await
    }
}

impl Screen for TagScreen {
    fn kind(&self) -> DemoScreen {
        DemoScreen::Tag
    }

    fn actions(&self) -> Vec<String> {
        TagKind::ALL
            .iter()
            .map(|kind| {
                let fields = match (kind.requires_key(), kind.accepts_value()) {
                    (true, true) => "key, value",
                    (true, false) => "key",
                    _ => "value",
                };
                format!("{kind} ({fields})")
            })
            .collect()
    }
}
