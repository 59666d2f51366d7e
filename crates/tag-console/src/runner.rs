use anyhow::Result;
use std::io::Write;
use std::sync::Arc;
use tracing::{error, info, warn};

use infrastructure::config::ConsoleConfig;
use infrastructure::{LoglineFileSink, LoglineSdk, RecordingSdk};

use crate::cli::Command;
use crate::console::Console;

/// Run one command with the logline facade and its file sink.
///
/// Returns `false` when the command failed or when a queued logline never
/// reached the file.
pub async fn run(config: &ConsoleConfig, command: Command, out: &mut dyn Write) -> Result<bool> {
    let (sdk, rx) = LoglineSdk::channel(config.queue_capacity);
    let sink = tokio::spawn(LoglineFileSink::new(&config.logline_path).run(rx));

    if config.feeds.is_empty() {
        warn!("No feeds configured");
    }
    let feeds = RecordingSdk::with_feeds(config.feeds.clone(), config.feed_page_size);

    let console = Console::new(Arc::new(sdk.clone()), Arc::new(feeds));
    let result = console.execute(command, out).await;

    // Dropping every sender closes the logline queue so the sink can finish
    drop(console);
    let queued = sdk.queued();
    drop(sdk);
    let written = sink.await?;

    if written < queued {
        error!(
            queued,
            written,
            path = %config.logline_path,
            "❌ Loglines were lost"
        );
        return Ok(false);
    }

    info!(written, "👋 Done");
    result
}
