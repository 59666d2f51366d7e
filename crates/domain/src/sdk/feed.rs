use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Feed entry returned by the SDK
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedItem {
    pub id: i64,
    pub title: String,
    pub message: String,
    /// Free-form payload attached to the feed
    #[serde(default)]
    pub content: serde_json::Value,
    pub created: DateTime<Utc>,
}

impl FeedItem {
    pub fn new(id: i64, title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            message: message.into(),
            content: serde_json::Value::Null,
            created: Utc::now(),
        }
    }

    pub fn with_content(mut self, content: serde_json::Value) -> Self {
        self.content = content;
        self
    }
}
