//! Domain layer - Pure tag input rules with no external dependencies
//!
//! This crate contains:
//! - Value Objects (TagKind, TagValue, RawFieldInput)
//! - The tag input validator producing SubmissionRequest
//! - Tag logline encoding
//! - The SDK facade port (trait)
//!
//! Principles:
//! - No I/O, no logging
//! - Validation errors double as user-facing messages
//! - Testable in isolation

pub mod error;
pub mod sdk;
pub mod tag;

// Re-export commonly used types
pub use error::{DomainError, ValidationError};
pub use sdk::{EngagementSdk, FeedItem, SdkError};
pub use tag::{RawFieldInput, SubmissionRequest, TagKind, TagValue};
