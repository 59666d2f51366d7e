use async_trait::async_trait;
use chrono::{DateTime, Utc};
use domain::{EngagementSdk, FeedItem, SdkError};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::Mutex;

/// A call received by [`RecordingSdk`]
#[derive(Debug, Clone, PartialEq)]
pub enum SdkCall {
    TagCuid(String),
    TagString { key: String, value: String },
    TagNumeric { key: String, value: f64 },
    TagDatetime { key: String, value: DateTime<Utc> },
    IncrementTag(String),
    RemoveTag(String),
    FetchFeeds(usize),
}

/// In-memory facade: records calls, serves a fixed feed list
#[derive(Clone)]
pub struct RecordingSdk {
    calls: Arc<Mutex<Vec<SdkCall>>>,
    failing: Arc<AtomicBool>,
    feeds: Arc<Vec<FeedItem>>,
    page_size: usize,
}

impl RecordingSdk {
    pub fn new() -> Self {
        Self::with_feeds(Vec::new(), 10)
    }

    pub fn with_feeds(feeds: Vec<FeedItem>, page_size: usize) -> Self {
        Self {
            calls: Arc::new(Mutex::new(Vec::new())),
            failing: Arc::new(AtomicBool::new(false)),
            feeds: Arc::new(feeds),
            page_size: page_size.max(1),
        }
    }

    /// While set, every call is recorded and then fails
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::Relaxed);
    }

    pub async fn recorded(&self) -> Vec<SdkCall> {
        self.calls.lock().await.clone()
    }

    async fn record(&self, call: SdkCall) -> Result<(), SdkError> {
        self.calls.lock().await.push(call);
        if self.failing.load(Ordering::Relaxed) {
            return Err(SdkError::Unavailable("simulated failure".to_string()));
        }
        Ok(())
    }
}

impl Default for RecordingSdk {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl EngagementSdk for RecordingSdk {
    async fn tag_cuid(&self, unique_id: &str) -> Result<(), SdkError> {
        self.record(SdkCall::TagCuid(unique_id.to_string())).await
    }

    async fn tag_string(&self, key: &str, value: &str) -> Result<(), SdkError> {
        self.record(SdkCall::TagString {
            key: key.to_string(),
            value: value.to_string(),
        })
        .await
    }

    async fn tag_numeric(&self, key: &str, value: f64) -> Result<(), SdkError> {
        self.record(SdkCall::TagNumeric {
            key: key.to_string(),
            value,
        })
        .await
    }

    async fn tag_datetime(&self, key: &str, value: DateTime<Utc>) -> Result<(), SdkError> {
        self.record(SdkCall::TagDatetime {
            key: key.to_string(),
            value,
        })
        .await
    }

    async fn increment_tag(&self, key: &str) -> Result<(), SdkError> {
        self.record(SdkCall::IncrementTag(key.to_string())).await
    }

    async fn remove_tag(&self, key: &str) -> Result<(), SdkError> {
        self.record(SdkCall::RemoveTag(key.to_string())).await
    }

    async fn fetch_feeds(&self, offset: usize) -> Result<Vec<FeedItem>, SdkError> {
        self.record(SdkCall::FetchFeeds(offset)).await?;
        Ok(self
            .feeds
            .iter()
            .skip(offset)
            .take(self.page_size)
            .cloned()
            .collect())
    }
}
