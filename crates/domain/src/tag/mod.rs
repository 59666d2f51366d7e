mod input;
mod kind;
mod logline;
mod request;
mod validator;
mod value;

pub use input::RawFieldInput;
pub use kind::TagKind;
pub use logline::{CUID_TAG_KEY, TagLogCode, TagLogline};
pub use request::SubmissionRequest;
pub use validator::{TAG_DATETIME_FORMAT, parse_datetime, validate, validate_at};
pub use value::TagValue;
