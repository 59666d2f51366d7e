//! Application layer - Tag submission and sample screen workflows

pub mod feed;
pub mod screen;
pub mod tag;

pub use feed::FeedPager;
pub use screen::{DemoScreen, Screen, ScreenRegistry};
pub use tag::{SubmissionOutcome, TagSubmitter};
