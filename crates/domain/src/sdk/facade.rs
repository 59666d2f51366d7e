use async_trait::async_trait;
use chrono::{DateTime, Utc};
use thiserror::Error;

use super::FeedItem;

/// Failure reported by the SDK facade.
///
/// Callers only distinguish success from failure, the variants exist for
/// diagnostics.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SdkError {
    #[error("Request rejected: {0}")]
    Rejected(String),
    #[error("SDK unavailable: {0}")]
    Unavailable(String),
    #[error("Operation not supported: {0}")]
    Unsupported(&'static str),
}

/// Engagement SDK entry point.
///
/// Injected wherever submissions are issued, implementations live in the
/// infrastructure layer.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EngagementSdk: Send + Sync {
    /// Tag the customer unique id (`sh_cuid`)
    async fn tag_cuid(&self, unique_id: &str) -> Result<(), SdkError>;

    async fn tag_string(&self, key: &str, value: &str) -> Result<(), SdkError>;

    async fn tag_numeric(&self, key: &str, value: f64) -> Result<(), SdkError>;

    async fn tag_datetime(&self, key: &str, value: DateTime<Utc>) -> Result<(), SdkError>;

    /// Increase a numeric tag by one
    async fn increment_tag(&self, key: &str) -> Result<(), SdkError>;

    async fn remove_tag(&self, key: &str) -> Result<(), SdkError>;

    /// Fetch one page of feeds starting at `offset`
    async fn fetch_feeds(&self, offset: usize) -> Result<Vec<FeedItem>, SdkError>;
}
