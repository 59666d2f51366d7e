use std::sync::Arc;
use tracing::{debug, error};

use domain::{EngagementSdk, FeedItem, SdkError};

/// Walks the SDK feed list page by page
pub struct FeedPager {
    sdk: Arc<dyn EngagementSdk>,
    offset: usize,
}

impl FeedPager {
    pub fn new(sdk: Arc<dyn EngagementSdk>) -> Self {
        Self { sdk, offset: 0 }
    }

    pub fn starting_at(mut self, offset: usize) -> Self {
        self.offset = offset;
        self
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Fetch the page at the current offset and move past it.
    /// The offset is left untouched when the fetch fails.
    pub async fn next_page(&mut self) -> Result<Vec<FeedItem>, SdkError> {
        match self.sdk.fetch_feeds(self.offset).await {
            Ok(items) => {
                debug!(
                    offset = self.offset,
                    count = items.len(),
                    "Fetched feed page"
                );
                self.offset += items.len();
                Ok(items)
            }
            Err(e) => {
                error!(offset = self.offset, error = %e, "Failed to fetch feeds");
                Err(e)
            }
        }
    }

    pub fn reset(&mut self) {
        self.offset = 0;
    }
}
