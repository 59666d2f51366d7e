use thiserror::Error;

use crate::tag::TagKind;

/// Local validation failures for a tag submission.
///
/// Each variant carries the kind being submitted and displays as the
/// message shown to the user.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please input key.")]
    MissingKey(TagKind),

    #[error("Please input value.")]
    MissingValue(TagKind),

    #[error("Please input a numeric value.")]
    MalformedNumber(TagKind),

    #[error("Please input date value as format, or leave nil to tag current time.")]
    MalformedDate(TagKind),
}

impl ValidationError {
    /// The tag kind that failed validation
    pub fn kind(&self) -> TagKind {
        match self {
            Self::MissingKey(kind)
            | Self::MissingValue(kind)
            | Self::MalformedNumber(kind)
            | Self::MalformedDate(kind) => *kind,
        }
    }

    pub fn field(&self) -> &'static str {
        match self {
            Self::MissingKey(_) => "key",
            Self::MissingValue(_) | Self::MalformedNumber(_) | Self::MalformedDate(_) => "value",
        }
    }
}

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    #[error("Invalid tag input: {0}")]
    Validation(#[from] ValidationError),

    #[error("Unknown tag kind: {0}")]
    UnknownTagKind(String),

    #[error("Unhandled sample case: {0}")]
    UnknownScreen(String),
}

pub type Result<T> = std::result::Result<T, DomainError>;
