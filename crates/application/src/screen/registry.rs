use std::sync::Arc;

use domain::EngagementSdk;
use domain::error::{DomainError, Result};

use super::{FeedScreen, TagScreen};

/// Sample screens the console can open
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DemoScreen {
    Tag,
    Feed,
}

impl DemoScreen {
    pub fn id(&self) -> &'static str {
        match self {
            Self::Tag => "tag",
            Self::Feed => "feed",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Tag => "Tag Sample",
            Self::Feed => "Feed Sample",
        }
    }
}

/// A screen built from the registry
pub trait Screen: Send + Sync {
    fn kind(&self) -> DemoScreen;

    fn title(&self) -> &'static str {
        self.kind().title()
    }

    /// Operations the screen offers, in display order
    fn actions(&self) -> Vec<String>;
}

fn open_tag_screen(sdk: Arc<dyn EngagementSdk>) -> Box<dyn Screen> {
    Box::new(TagScreen::new(sdk))
}

fn open_feed_screen(sdk: Arc<dyn EngagementSdk>) -> Box<dyn Screen> {
    Box::new(FeedScreen::new(sdk))
}

pub type ScreenFactory = fn(Arc<dyn EngagementSdk>) -> Box<dyn Screen>;

/// Ordered mapping from screen identifier to constructor
#[derive(Default)]
pub struct ScreenRegistry {
    entries: Vec<(DemoScreen, ScreenFactory)>,
}

impl ScreenRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(DemoScreen::Tag, open_tag_screen);
        registry.register(DemoScreen::Feed, open_feed_screen);
        registry
    }

    /// Registering a screen twice replaces the earlier factory in place
    pub fn register(&mut self, screen: DemoScreen, factory: ScreenFactory) {
        match self.entries.iter_mut().find(|(s, _)| *s == screen) {
            Some(entry) => entry.1 = factory,
            None => self.entries.push((screen, factory)),
        }
    }

    pub fn screens(&self) -> impl Iterator<Item = DemoScreen> + '_ {
        self.entries.iter().map(|(screen, _)| *screen)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn open_row(&self, row: usize, sdk: Arc<dyn EngagementSdk>) -> Result<Box<dyn Screen>> {
        let (_, factory) = self
            .entries
            .get(row)
            .ok_or_else(|| DomainError::UnknownScreen(format!("row {row}")))?;
        Ok(factory(sdk))
    }

    pub fn open(&self, id: &str, sdk: Arc<dyn EngagementSdk>) -> Result<Box<dyn Screen>> {
        let (_, factory) = self
            .entries
            .iter()
            .find(|(screen, _)| screen.id() == id)
            .ok_or_else(|| DomainError::UnknownScreen(id.to_string()))?;
        Ok(factory(sdk))
    }
}
