use chrono::{DateTime, NaiveDateTime, Utc};

use super::{SubmissionRequest, TagKind, TagValue};
use crate::error::ValidationError;

/// Format of datetime tag input, interpreted in UTC
pub const TAG_DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Turn raw tag screen input into a request ready for the SDK.
///
/// Rules per kind:
/// - `Cuid`: value required, key ignored
/// - `Numeric`: key and value required, value must be a finite decimal number
/// - `String`: key and value required
/// - `Datetime`: key required, an empty value means "now", otherwise
///   `yyyy-MM-dd HH:mm:ss` in UTC
/// - `Increment` / `Delete`: key required, value ignored
///
/// Fields are trimmed before the emptiness check and the key is checked
/// before the value.
pub fn validate(
    kind: TagKind,
    raw_key: Option<&str>,
    raw_value: Option<&str>,
) -> Result<SubmissionRequest, ValidationError> {
    validate_at(kind, raw_key, raw_value, Utc::now())
}

/// Same as [`validate`] with the clock reading supplied by the caller.
pub fn validate_at(
    kind: TagKind,
    raw_key: Option<&str>,
    raw_value: Option<&str>,
    now: DateTime<Utc>,
) -> Result<SubmissionRequest, ValidationError> {
    let key = if kind.requires_key() {
        let key = trimmed(raw_key).ok_or(ValidationError::MissingKey(kind))?;
        Some(key.to_string())
    } else {
        None
    };

    let value = match kind {
        TagKind::Cuid | TagKind::String => {
            let text = trimmed(raw_value).ok_or(ValidationError::MissingValue(kind))?;
            TagValue::Text(text.to_string())
        }
        TagKind::Numeric => {
            let text = trimmed(raw_value).ok_or(ValidationError::MissingValue(kind))?;
            let number = parse_number(text).ok_or(ValidationError::MalformedNumber(kind))?;
            TagValue::Number(number)
        }
        TagKind::Datetime => match trimmed(raw_value) {
            None => TagValue::Timestamp(now),
            Some(text) => {
                let ts = parse_datetime(text).ok_or(ValidationError::MalformedDate(kind))?;
                TagValue::Timestamp(ts)
            }
        },
        TagKind::Increment | TagKind::Delete => TagValue::None,
    };

    Ok(SubmissionRequest::new(kind, key, value))
}

fn trimmed(raw: Option<&str>) -> Option<&str> {
    raw.map(str::trim).filter(|s| !s.is_empty())
}

fn parse_number(text: &str) -> Option<f64> {
    text.parse::<f64>().ok().filter(|n| n.is_finite())
}

pub fn parse_datetime(text: &str) -> Option<DateTime<Utc>> {
    NaiveDateTime::parse_from_str(text, TAG_DATETIME_FORMAT)
        .ok()
        .map(|naive| naive.and_utc())
}
