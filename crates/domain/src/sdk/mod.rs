mod facade;
mod feed;

pub use facade::{EngagementSdk, SdkError};
#[cfg(test)]
pub use facade::MockEngagementSdk;
pub use feed::FeedItem;
