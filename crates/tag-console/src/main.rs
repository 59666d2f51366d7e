use anyhow::Result;
use clap::Parser;
use dotenv::dotenv;
use std::process::ExitCode;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use infrastructure::config::ConsoleConfig;
use tag_console::{Args, runner};

async fn run() -> Result<bool> {
    dotenv().ok();

    // Logs go to stderr, stdout carries the dialog text
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG")
                .unwrap_or_else(|_| "info,tag_console=debug,application=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = Args::parse();

    let mut config = ConsoleConfig::load(&args.config_dir)?;
    if let Some(path) = args.logline_path {
        config.logline_path = path;
    }
    info!(
        config_dir = %args.config_dir,
        logline_path = %config.logline_path,
        "✅ Configuration loaded"
    );

    let mut stdout = std::io::stdout();
    runner::run(&config, args.command, &mut stdout).await
}

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(e) => {
            eprintln!("❌ {e:#}");
            ExitCode::from(2)
        }
    }
}
