mod pager;

pub use pager::FeedPager;
