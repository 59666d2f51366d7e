use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::DomainError;

/// Tag operation offered by the tag screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TagKind {
    /// Customer unique id, tagged under `sh_cuid`
    Cuid,
    Numeric,
    String,
    Datetime,
    Increment,
    Delete,
}

impl TagKind {
    pub const ALL: [TagKind; 6] = [
        Self::Cuid,
        Self::Numeric,
        Self::String,
        Self::Datetime,
        Self::Increment,
        Self::Delete,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Cuid => "cuid",
            Self::Numeric => "numeric",
            Self::String => "string",
            Self::Datetime => "datetime",
            Self::Increment => "increment",
            Self::Delete => "delete",
        }
    }

    pub fn requires_key(&self) -> bool {
        !matches!(self, Self::Cuid)
    }

    /// Datetime takes an optional value, so it is not counted here.
    pub fn requires_value(&self) -> bool {
        matches!(self, Self::Cuid | Self::Numeric | Self::String)
    }

    pub fn accepts_value(&self) -> bool {
        !matches!(self, Self::Increment | Self::Delete)
    }
}

impl std::fmt::Display for TagKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TagKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| DomainError::UnknownTagKind(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_as_str_round_trips_through_from_str() {
        for kind in TagKind::ALL {
            assert_eq!(kind.as_str().parse::<TagKind>().unwrap(), kind);
        }
        assert_eq!("DateTime".parse::<TagKind>().unwrap(), TagKind::Datetime);
    }

    #[test]
    fn test_unknown_kind() {
        let result = "location".parse::<TagKind>();
        assert_eq!(
            result.unwrap_err(),
            DomainError::UnknownTagKind("location".to_string())
        );
    }

    #[test]
    fn test_required_fields() {
        assert!(!TagKind::Cuid.requires_key());
        assert!(TagKind::Cuid.requires_value());
        assert!(TagKind::Datetime.requires_key());
        assert!(!TagKind::Datetime.requires_value());
        assert!(TagKind::Datetime.accepts_value());
        assert!(!TagKind::Increment.accepts_value());
        assert!(!TagKind::Delete.requires_value());
    }

    #[test]
    fn test_serde_lowercase() {
        let json = serde_json::to_string(&TagKind::Numeric).unwrap();
        assert_eq!(json, "\"numeric\"");
    }
}
