//! Access control types
//!
//! Core types used by the access control system.

use crate::error::RegistryError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Kind of access that can be requested against a resource
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum AccessType {
    Read,
    Write,
}

impl AccessType {
    /// Get the canonical token for this access type
    pub const fn as_str(&self) -> &'static str {
        match self {
            AccessType::Read => "READ",
            AccessType::Write => "WRITE",
        }
    }

    /// Try to parse an access type from its canonical token
    ///
    /// Matching is case-sensitive: `read` is not an access type.
    pub fn try_parse(s: &str) -> Option<Self> {
        match s {
            "READ" => Some(AccessType::Read),
            "WRITE" => Some(AccessType::Write),
            _ => None,
        }
    }

    /// Get all access types
    pub fn all() -> &'static [AccessType] {
        &[AccessType::Read, AccessType::Write]
    }
}

impl FromStr for AccessType {
    type Err = RegistryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_parse(s).ok_or_else(|| RegistryError::InvalidAccessType(s.to_string()))
    }
}

impl fmt::Display for AccessType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_access_type_roundtrip() {
        for access in AccessType::all() {
            let parsed = AccessType::try_parse(access.as_str()).unwrap();
            assert_eq!(*access, parsed);
        }
    }

    #[test]
    fn test_parse_is_case_sensitive() {
        assert_eq!(AccessType::try_parse("read"), None);
        assert_eq!(AccessType::try_parse("Write"), None);
        assert_eq!(AccessType::try_parse("EXECUTE"), None);
        assert_eq!(AccessType::try_parse(""), None);
    }

    #[test]
    fn test_from_str_error() {
        let err = "DELETE".parse::<AccessType>().unwrap_err();
        assert_eq!(err, RegistryError::InvalidAccessType("DELETE".into()));
    }

    #[test]
    fn test_serde_uses_canonical_token() {
        let json = serde_json::to_string(&AccessType::Write).unwrap();
        assert_eq!(json, r#""WRITE""#);

        let access: AccessType = serde_json::from_str(r#""READ""#).unwrap();
        assert_eq!(access, AccessType::Read);
    }
}
