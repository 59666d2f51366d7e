use config::{Config, ConfigError, Environment, File};
use domain::FeedItem;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ConsoleConfig {
    /// JSON-lines file tag loglines are appended to
    #[serde(default = "default_logline_path")]
    pub logline_path: String,
    #[serde(default = "default_queue_capacity")]
    pub queue_capacity: usize,
    #[serde(default = "default_feed_page_size")]
    pub feed_page_size: usize,
    /// Feeds served by the offline facade
    #[serde(default)]
    pub feeds: Vec<FeedItem>,
}

fn default_logline_path() -> String {
    "data/loglines.jsonl".to_string()
}
fn default_queue_capacity() -> usize {
    64
}
fn default_feed_page_size() -> usize {
    10
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            logline_path: default_logline_path(),
            queue_capacity: default_queue_capacity(),
            feed_page_size: default_feed_page_size(),
            feeds: Vec::new(),
        }
    }
}

impl ConsoleConfig {
    pub fn load(config_dir: &str) -> Result<Self, ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".into());
        Self::load_with_mode(config_dir, &run_mode)
    }

    /// Same layering as [`ConsoleConfig::load`] with an explicit run mode
    pub fn load_with_mode(config_dir: &str, run_mode: &str) -> Result<Self, ConfigError> {
        let s = Config::builder()
            // Local config file, e.g. config/default.toml
            .add_source(File::with_name(&format!("{}/default", config_dir)).required(false))
            // Per run mode overrides
            .add_source(File::with_name(&format!("{}/{}", config_dir, run_mode)).required(false))
            // Environment variables (e.g. TAG_CONSOLE__QUEUE_CAPACITY=16)
            .add_source(
                Environment::with_prefix("TAG_CONSOLE")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        s.try_deserialize()
    }
}
