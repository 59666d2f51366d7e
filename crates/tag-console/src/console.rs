use anyhow::Result;
use std::io::Write;
use std::sync::Arc;
use tracing::info;

use application::feed::FeedPager;
use application::screen::ScreenRegistry;
use application::tag::TagSubmitter;
use domain::EngagementSdk;
use domain::tag::RawFieldInput;

use crate::cli::Command;

/// Runs console commands against injected SDK facades.
///
/// Tags go to `sdk`, feeds are read from `feeds` since the logline facade
/// has no feed endpoint.
pub struct Console {
    sdk: Arc<dyn EngagementSdk>,
    feeds: Arc<dyn EngagementSdk>,
    registry: ScreenRegistry,
}

impl Console {
    pub fn new(sdk: Arc<dyn EngagementSdk>, feeds: Arc<dyn EngagementSdk>) -> Self {
        Self {
            sdk,
            feeds,
            registry: ScreenRegistry::with_defaults(),
        }
    }

    /// Execute one command, writing user-facing text to `out`.
    /// Returns whether the command succeeded.
    pub async fn execute(&self, command: Command, out: &mut dyn Write) -> Result<bool> {
        match command {
            Command::Screens => {
                for (row, screen) in self.registry.screens().enumerate() {
                    writeln!(out, "{row}\t{}\t{}", screen.id(), screen.title())?;
                }
                Ok(true)
            }
            Command::Open { row } => {
                let screen = self.registry.open_row(row, self.sdk.clone())?;
                writeln!(out, "{}", screen.title())?;
                for action in screen.actions() {
                    writeln!(out, "  - {action}")?;
                }
                Ok(true)
            }
            Command::Tag { kind, key, value } => {
                let input = RawFieldInput::new(key, value);
                let outcome = TagSubmitter::new(self.sdk.clone())
                    .submit(kind, &input)
                    .await;
                writeln!(out, "{}", outcome.dialog_message())?;
                Ok(outcome.is_success())
            }
            Command::Feed { offset } => {
                let mut pager = FeedPager::new(self.feeds.clone()).starting_at(offset);
                let items = pager.next_page().await?;
                info!(offset, count = items.len(), "📰 Feed page loaded");

                if items.is_empty() {
                    writeln!(out, "No feeds.")?;
                }
                for item in &items {
                    writeln!(out, "[{}] {}: {}", item.id, item.title, item.message)?;
                    if !item.content.is_null() {
                        writeln!(out, "    {}", serde_json::to_string(&item.content)?)?;
                    }
                }
                Ok(true)
            }
        }
    }
}
