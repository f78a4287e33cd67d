use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Canonical identifier of a backend record.
///
/// The backend hands out numeric ids for some resources and UUID strings for
/// others. Both are normalized to one string form when a record is decoded,
/// so comparisons never depend on how the id was typed on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct EntityId(String);

impl EntityId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into().trim().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Parse a picker value; empty strings and the "none" sentinel map to `None`.
    pub fn from_picker(value: &str) -> Option<Self> {
        let value = value.trim();
        if value.is_empty() || value == crate::domain::common::entity::NONE_OPTION {
            None
        } else {
            Some(Self::new(value))
        }
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for EntityId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for EntityId {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl From<i64> for EntityId {
    fn from(value: i64) -> Self {
        Self(value.to_string())
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Int(i64),
    UInt(u64),
    Str(String),
}

impl<'de> Deserialize<'de> for EntityId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match RawId::deserialize(deserializer)? {
            RawId::Int(v) => Self(v.to_string()),
            RawId::UInt(v) => Self(v.to_string()),
            RawId::Str(s) => Self::new(s),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_and_string_ids_compare_equal() {
        let a: EntityId = serde_json::from_str("5").unwrap();
        let b: EntityId = serde_json::from_str("\"5\"").unwrap();
        assert_eq!(a, b);
        assert_eq!(a.as_str(), "5");
    }

    #[test]
    fn uuid_ids_are_kept_verbatim() {
        let id: EntityId =
            serde_json::from_str("\"7c9e6679-7425-40de-944b-e07fc1f90ae7\"").unwrap();
        assert_eq!(id.to_string(), "7c9e6679-7425-40de-944b-e07fc1f90ae7");
    }

    #[test]
    fn serializes_as_string() {
        assert_eq!(serde_json::to_string(&EntityId::from(12)).unwrap(), "\"12\"");
    }

    #[test]
    fn picker_sentinel_is_none() {
        assert_eq!(EntityId::from_picker("none"), None);
        assert_eq!(EntityId::from_picker("  "), None);
        assert_eq!(EntityId::from_picker("3"), Some(EntityId::from(3)));
    }
}
