use serde::{Deserialize, Serialize};

use super::{TagKind, TagValue};
use crate::error::ValidationError;
use crate::sdk::{EngagementSdk, SdkError};

/// Validated tag submission, built only by the validator.
/// Deserialized requests go through the same field rules.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "UncheckedRequest")]
pub struct SubmissionRequest {
    kind: TagKind,
    key: Option<String>,
    value: TagValue,
}

impl SubmissionRequest {
    pub(crate) fn new(kind: TagKind, key: Option<String>, value: TagValue) -> Self {
        Self { kind, key, value }
    }

    pub fn kind(&self) -> TagKind {
        self.kind
    }

    /// `None` only for cuid submissions
    pub fn key(&self) -> Option<&str> {
        self.key.as_deref()
    }

    pub fn value(&self) -> &TagValue {
        &self.value
    }

    /// Hand the request to the SDK facade, one call per request.
    pub async fn dispatch(&self, sdk: &dyn EngagementSdk) -> Result<(), SdkError> {
        let key = self.key.as_deref().unwrap_or_default();
        match (self.kind, &self.value) {
            (TagKind::Cuid, TagValue::Text(id)) => sdk.tag_cuid(id).await,
            (TagKind::String, TagValue::Text(text)) => sdk.tag_string(key, text).await,
            (TagKind::Numeric, TagValue::Number(n)) => sdk.tag_numeric(key, *n).await,
            (TagKind::Datetime, TagValue::Timestamp(ts)) => sdk.tag_datetime(key, *ts).await,
            (TagKind::Increment, _) => sdk.increment_tag(key).await,
            (TagKind::Delete, _) => sdk.remove_tag(key).await,
            (kind, value) => Err(SdkError::Rejected(format!(
                "{kind} tag cannot carry {value:?}"
            ))),
        }
    }
}

#[derive(Deserialize)]
struct UncheckedRequest {
    kind: TagKind,
    #[serde(default)]
    key: Option<String>,
    value: TagValue,
}

impl TryFrom<UncheckedRequest> for SubmissionRequest {
    type Error = ValidationError;

    fn try_from(raw: UncheckedRequest) -> Result<Self, Self::Error> {
        let kind = raw.kind;
        let key = if kind.requires_key() {
            let key = raw
                .key
                .as_deref()
                .map(str::trim)
                .filter(|k| !k.is_empty())
                .ok_or(ValidationError::MissingKey(kind))?;
            Some(key.to_string())
        } else {
            None
        };

        let value = match (kind, raw.value) {
            (TagKind::Cuid | TagKind::String, TagValue::Text(text)) => {
                let text = text.trim();
                if text.is_empty() {
                    return Err(ValidationError::MissingValue(kind));
                }
                TagValue::Text(text.to_string())
            }
            (TagKind::Cuid | TagKind::String, _) => return Err(ValidationError::MissingValue(kind)),
            (TagKind::Numeric, TagValue::Number(n)) if n.is_finite() => TagValue::Number(n),
            (TagKind::Numeric, _) => return Err(ValidationError::MalformedNumber(kind)),
            (TagKind::Datetime, TagValue::Timestamp(ts)) => TagValue::Timestamp(ts),
            (TagKind::Datetime, _) => return Err(ValidationError::MalformedDate(kind)),
            (TagKind::Increment | TagKind::Delete, _) => TagValue::None,
        };

        Ok(Self::new(kind, key, value))
    }
}
