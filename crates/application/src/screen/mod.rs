mod feed_screen;
mod registry;
mod tag_screen;

pub use feed_screen::FeedScreen;
pub use registry::{DemoScreen, Screen, ScreenFactory, ScreenRegistry};
pub use tag_screen::TagScreen;
