//! ID types for players and matches.
//!
//! Both come from the document store as opaque strings.

use crate::error::MatchdayError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Type-safe wrapper for player IDs.
///
/// Ordering is lexicographic on the raw id and is used wherever a
/// deterministic tie-break between players is needed.
///
/// # Examples
///
/// ```rust
/// use matchday::PlayerId;
///
/// let id = PlayerId::new("p-10");
/// assert_eq!(id.as_str(), "p-10");
/// assert_eq!(id.to_string(), "p-10");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerId(pub String);

impl PlayerId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for PlayerId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl FromStr for PlayerId {
    type Err = MatchdayError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(MatchdayError::validation("player id cannot be empty"));
        }
        Ok(Self(trimmed.to_string()))
    }
}

/// Type-safe wrapper for match IDs
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MatchId(pub String);

impl MatchId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MatchId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for MatchId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl FromStr for MatchId {
    type Err = MatchdayError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(MatchdayError::validation("match id cannot be empty"));
        }
        Ok(Self(trimmed.to_string()))
    }
}
