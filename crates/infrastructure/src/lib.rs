//! Infrastructure layer - SDK facade adapters and configuration

pub mod config;
pub mod sdk;

pub use config::ConsoleConfig;
pub use sdk::{LoglineFileSink, LoglineSdk, RecordingSdk, SdkCall};
