use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use super::{SubmissionRequest, TAG_DATETIME_FORMAT, TagKind, TagValue};

/// Key the customer unique id is tagged under
pub const CUID_TAG_KEY: &str = "sh_cuid";

/// Logline codes used for tag operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TagLogCode {
    Increment,
    Delete,
    Add,
}

impl TagLogCode {
    pub fn code(&self) -> i32 {
        match self {
            Self::Increment => 8997,
            Self::Delete => 8998,
            Self::Add => 8999,
        }
    }
}

/// One tag event as recorded for upload: a code plus a JSON comment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TagLogline {
    pub code: i32,
    pub comment: Value,
    pub created: DateTime<Utc>,
}

impl TagLogline {
    fn new(code: TagLogCode, comment: Value) -> Self {
        Self {
            code: code.code(),
            comment,
            created: Utc::now(),
        }
    }

    pub fn cuid(unique_id: &str) -> Self {
        Self::string(CUID_TAG_KEY, unique_id)
    }

    pub fn string(key: &str, value: &str) -> Self {
        Self::new(TagLogCode::Add, json!({ "key": key, "string": value }))
    }

    pub fn numeric(key: &str, value: f64) -> Self {
        Self::new(TagLogCode::Add, json!({ "key": key, "numeric": value }))
    }

    pub fn datetime(key: &str, value: DateTime<Utc>) -> Self {
        let formatted = value.format(TAG_DATETIME_FORMAT).to_string();
        Self::new(TagLogCode::Add, json!({ "key": key, "datetime": formatted }))
    }

    pub fn remove(key: &str) -> Self {
        Self::new(TagLogCode::Delete, json!({ "key": key }))
    }

    pub fn increment(key: &str) -> Self {
        Self::new(TagLogCode::Increment, json!({ "key": key, "numeric": 1 }))
    }

    /// Logline equivalent of a validated request
    pub fn from_request(request: &SubmissionRequest) -> Self {
        let key = request.key().unwrap_or_default();
        match (request.kind(), request.value()) {
            (TagKind::Cuid, TagValue::Text(id)) => Self::cuid(id),
            (_, TagValue::Text(text)) => Self::string(key, text),
            (_, TagValue::Number(n)) => Self::numeric(key, *n),
            (_, TagValue::Timestamp(ts)) => Self::datetime(key, *ts),
            (TagKind::Increment, TagValue::None) => Self::increment(key),
            (_, TagValue::None) => Self::remove(key),
        }
    }

    pub fn key(&self) -> Option<&str> {
        self.comment.get("key").and_then(Value::as_str)
    }
}
