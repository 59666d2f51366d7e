pub mod file_sink;
pub mod logline_sdk;
pub mod recording_sdk;

pub use file_sink::LoglineFileSink;
pub use logline_sdk::LoglineSdk;
pub use recording_sdk::{RecordingSdk, SdkCall};
