//! Strongly-typed identifier value objects.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ValidationError;

/// Identifier of a recognized landmark.
///
/// Doubles as the chat session key: a landmark has at most one live
/// conversation, so no separate session identifier is generated.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct LandmarkId(String);

impl LandmarkId {
    /// Creates a new LandmarkId, returning error if blank.
    pub fn new(id: impl Into<String>) -> Result<Self, ValidationError> {
        let id = id.into();
        let trimmed = id.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::empty_field("landmark_id"));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Returns the inner string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LandmarkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for LandmarkId {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for LandmarkId {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<LandmarkId> for String {
    fn from(id: LandmarkId) -> Self {
        id.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn landmark_id_accepts_non_empty() {
        let id = LandmarkId::new("eiffel-tower").unwrap();
        assert_eq!(id.as_str(), "eiffel-tower");
    }

    #[test]
    fn landmark_id_trims_whitespace() {
        let id = LandmarkId::new("  colosseum \n").unwrap();
        assert_eq!(id.as_str(), "colosseum");
    }

    #[test]
    fn landmark_id_rejects_blank() {
        assert!(LandmarkId::new("").is_err());
        assert!(LandmarkId::new("   ").is_err());
    }

    #[test]
    fn landmark_id_parses_from_str() {
        let id: LandmarkId = "big-ben".parse().unwrap();
        assert_eq!(id.to_string(), "big-ben");
    }

    #[test]
    fn landmark_id_serde_is_transparent_string() {
        let id = LandmarkId::new("taj-mahal").unwrap();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"taj-mahal\"");

        let back: LandmarkId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);

        assert!(serde_json::from_str::<LandmarkId>("\"\"").is_err());
    }
}
