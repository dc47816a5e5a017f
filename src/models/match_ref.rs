//! Typed match references.
//!
//! Every match in the tournament is addressed by a composite key
//! `{category}-{round}-match-{index}`. [`MatchRef`] is the typed form;
//! topology logic works on it and only the serialization boundary touches
//! the string key.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error raised when a string is not a valid match key.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("malformed match key: {0:?}")]
pub struct MatchKeyError(pub String);

/// A reference to one match: category, round key, and zero-based index
/// within the round.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct MatchRef {
    pub category: String,
    pub round: String,
    pub index: usize,
}

impl MatchRef {
    /// Create a new match reference.
    pub fn new(category: impl Into<String>, round: impl Into<String>, index: usize) -> Self {
        Self {
            category: category.into(),
            round: round.into(),
            index,
        }
    }

    /// The external string key for this match.
    pub fn key(&self) -> String {
        self.to_string()
    }

    /// The two matches in the previous round whose winners meet here.
    ///
    /// Match `j` is fed by matches `2j` and `2j + 1`; the caller supplies the
    /// previous round's key.
    pub fn feeders(&self, prev_round: &str) -> (MatchRef, MatchRef) {
        (
            MatchRef::new(self.category.clone(), prev_round, self.index * 2),
            MatchRef::new(self.category.clone(), prev_round, self.index * 2 + 1),
        )
    }
}

impl fmt::Display for MatchRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}-match-{}", self.category, self.round, self.index)
    }
}

impl FromStr for MatchRef {
    type Err = MatchKeyError;

    /// Parse a `{category}-{round}-match-{index}` key.
    ///
    /// Parsed from the right so that category names may themselves contain
    /// hyphens. Round keys may not.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || MatchKeyError(s.to_string());

        let mut parts = s.rsplitn(4, '-');
        let index: usize = parts
            .next()
            .and_then(|p| p.parse().ok())
            .ok_or_else(err)?;
        let literal = parts.next().ok_or_else(err)?;
        if literal != "match" {
            return Err(err());
        }
        let round = parts.next().filter(|p| !p.is_empty()).ok_or_else(err)?;
        let category = parts.next().filter(|p| !p.is_empty()).ok_or_else(err)?;

        Ok(MatchRef::new(category, round, index))
    }
}

impl TryFrom<String> for MatchRef {
    type Error = MatchKeyError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<MatchRef> for String {
    fn from(mref: MatchRef) -> Self {
        mref.to_string()
    }
}
