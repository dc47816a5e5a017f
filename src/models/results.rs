//! Recorded match outcomes.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::WinnerValue;

/// Sparse mapping of match key -> recorded winner.
///
/// Only matches that have concluded appear. Results grow monotonically over
/// a tournament, but the engine never mutates them; every scoring pass is a
/// pure function over the snapshot it is handed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ActualResults(BTreeMap<String, WinnerValue>);

impl ActualResults {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the winner of a match.
    pub fn record(&mut self, key: impl Into<String>, winner: impl Into<WinnerValue>) {
        self.0.insert(key.into(), winner.into());
    }

    /// The normalized winner name for a match, if it has been decided.
    pub fn winner(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(WinnerValue::name)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &WinnerValue)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<BTreeMap<String, WinnerValue>> for ActualResults {
    fn from(map: BTreeMap<String, WinnerValue>) -> Self {
        Self(map)
    }
}

impl FromIterator<(String, WinnerValue)> for ActualResults {
    fn from_iter<I: IntoIterator<Item = (String, WinnerValue)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
