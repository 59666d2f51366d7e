use anyhow::{Context, Result};
use domain::tag::TagLogline;
use std::path::{Path, PathBuf};
use tokio::fs::OpenOptions;
use tokio::io::AsyncWriteExt;
use tokio::sync::mpsc;
use tracing::{debug, error, info};

/// Appends loglines to a JSON-lines file
pub struct LoglineFileSink {
    path: PathBuf,
}

impl LoglineFileSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Open, write, flush per line so the file is complete after every call
    pub async fn append(&self, line: &TagLogline) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent)
                .await
                .with_context(|| format!("Failed to create {:?}", parent))?;
        }

        let mut payload = serde_json::to_vec(line)?;
        payload.push(b'\n');

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .await
            .with_context(|| format!("Failed to open logline file {:?}", self.path))?;
        file.write_all(&payload).await?;
        file.flush().await?;
        Ok(())
    }

    /// Drain the queue until every sender is dropped. Returns lines written.
    pub async fn run(self, mut rx: mpsc::Receiver<TagLogline>) -> usize {
        info!(path = ?self.path, "📝 Logline sink started");
        let mut written = 0;

        while let Some(line) = rx.recv().await {
            match self.append(&line).await {
                Ok(()) => {
                    written += 1;
                    debug!(code = line.code, "Logline written");
                }
                Err(e) => error!(code = line.code, "❌ Failed to write logline: {:#}", e),
            }
        }

        info!(written, "📝 Logline queue closed. Sink shutting down.");
        written
    }
}
