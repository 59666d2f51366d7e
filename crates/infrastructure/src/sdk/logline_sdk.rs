use async_trait::async_trait;
use chrono::{DateTime, Utc};
use domain::tag::TagLogline;
use domain::{EngagementSdk, FeedItem, SdkError};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use tokio::sync::mpsc::{self, error::TrySendError};
use tracing::debug;

/// Facade that records every tag call as a logline on a bounded queue.
///
/// Pair it with a [`super::LoglineFileSink`] draining the receiver.
#[derive(Clone)]
pub struct LoglineSdk {
    queue: mpsc::Sender<TagLogline>,
    queued: Arc<AtomicUsize>,
}

impl LoglineSdk {
    pub fn new(queue: mpsc::Sender<TagLogline>) -> Self {
        Self {
            queue,
            queued: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn channel(capacity: usize) -> (Self, mpsc::Receiver<TagLogline>) {
        let (tx, rx) = mpsc::channel(capacity.max(1));
        (Self::new(tx), rx)
    }

    /// Lines accepted onto the queue so far, shared by all clones
    pub fn queued(&self) -> usize {
        self.queued.load(Ordering::SeqCst)
    }

    fn enqueue(&self, line: TagLogline) -> Result<(), SdkError> {
        let code = line.code;
        match self.queue.try_send(line) {
            Ok(()) => {
                self.queued.fetch_add(1, Ordering::SeqCst);
                debug!(code, "Logline queued");
                Ok(())
            }
            Err(TrySendError::Full(_)) => {
                Err(SdkError::Rejected("logline queue is full".to_string()))
            }
            Err(TrySendError::Closed(_)) => {
                Err(SdkError::Unavailable("logline queue is closed".to_string()))
            }
        }
    }
}

#[async_trait]
impl EngagementSdk for LoglineSdk {
    async fn tag_cuid(&self, unique_id: &str) -> Result<(), SdkError> {
        self.enqueue(TagLogline::cuid(unique_id))
    }

    async fn tag_string(&self, key: &str, value: &str) -> Result<(), SdkError> {
        self.enqueue(TagLogline::string(key, value))
    }

    async fn tag_numeric(&self, key: &str, value: f64) -> Result<(), SdkError> {
        self.enqueue(TagLogline::numeric(key, value))
    }

    async fn tag_datetime(&self, key: &str, value: DateTime<Utc>) -> Result<(), SdkError> {
        self.enqueue(TagLogline::datetime(key, value))
    }

    async fn increment_tag(&self, key: &str) -> Result<(), SdkError> {
        self.enqueue(TagLogline::increment(key))
    }

    async fn remove_tag(&self, key: &str) -> Result<(), SdkError> {
        self.enqueue(TagLogline::remove(key))
    }

    async fn fetch_feeds(&self, _offset: usize) -> Result<Vec<FeedItem>, SdkError> {
        Err(SdkError::Unsupported("feed fetch over loglines"))
    }
}
