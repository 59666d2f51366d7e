use clap::{Parser, Subcommand};
use domain::tag::TagKind;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to config directory
    #[arg(long, default_value = "config")]
    pub config_dir: String,

    /// Override the logline output file
    #[arg(long)]
    pub logline_path: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// List the sample screens
    Screens,

    /// Show a sample screen by row
    Open { row: usize },

    /// Submit a tag (cuid, numeric, string, datetime, increment, delete)
    Tag {
        kind: TagKind,

        #[arg(long)]
        key: Option<String>,

        /// Datetime format: yyyy-MM-dd HH:mm:ss (UTC), empty means now
        #[arg(long)]
        value: Option<String>,
    },

    /// Fetch a page of feeds
    Feed {
        #[arg(long, default_value_t = 0)]
        offset: usize,
    },
}
