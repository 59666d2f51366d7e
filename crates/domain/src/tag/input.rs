use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{SubmissionRequest, TagKind, validator};
use crate::error::ValidationError;

/// Key/value text exactly as typed into the tag screen
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawFieldInput {
    pub key: Option<String>,
    pub value: Option<String>,
}

impl RawFieldInput {
    pub fn new(key: Option<String>, value: Option<String>) -> Self {
        Self { key, value }
    }

    pub fn key_only(key: impl Into<String>) -> Self {
        Self {
            key: Some(key.into()),
            value: None,
        }
    }

    pub fn value_only(value: impl Into<String>) -> Self {
        Self {
            key: None,
            value: Some(value.into()),
        }
    }

    pub fn pair(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: Some(key.into()),
            value: Some(value.into()),
        }
    }

    pub fn validate(&self, kind: TagKind) -> Result<SubmissionRequest, ValidationError> {
        validator::validate(kind, self.key.as_deref(), self.value.as_deref())
    }

    pub fn validate_at(
        &self,
        kind: TagKind,
        now: DateTime<Utc>,
    ) -> Result<SubmissionRequest, ValidationError> {
        validator::validate_at(kind, self.key.as_deref(), self.value.as_deref(), now)
    }
}
