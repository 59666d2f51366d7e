use std::sync::Arc;
use tokio::sync::Mutex;

use domain::{EngagementSdk, FeedItem, SdkError};

use super::{DemoScreen, Screen};
use crate::feed::FeedPager;

pub struct FeedScreen {
    pager: Mutex<FeedPager>,
}

impl FeedScreen {
    pub fn new(sdk: Arc<dyn EngagementSdk>) -> Self {
        Self {
            pager: Mutex::new(FeedPager::new(sdk)),
        }
    }

    pub async fn load_more(&self) -> Result<Vec<FeedItem>, SdkError> {
        self.pager.lock().await.next_page().await
    }

    pub async fn refresh(&self) -> Result<Vec<FeedItem>, SdkError> {
        let mut pager = self.pager.lock().await;
        pager.reset();
        pager.next_page().await
    }
}

impl Screen for FeedScreen {
    fn kind(&self) -> DemoScreen {
        DemoScreen::Feed
    }

    fn actions(&self) -> Vec<String> {
        vec!["refresh".to_string(), "load more".to_string()]
    }
}
