mod submitter;

pub use submitter::{SubmissionOutcome, TagSubmitter};
