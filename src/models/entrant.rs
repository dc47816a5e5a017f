//! Entrants and the winner-value wire formats.

use serde::{Deserialize, Serialize};

/// A player in the original draw.
///
/// `seed` is a display label (empty for unseeded players); `name` is the
/// unique identifier used everywhere else. Serialized as a two-element
/// `[seed, name]` array, the format used by bracket JSON documents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "(String, String)", into = "(String, String)")]
pub struct Entrant {
    pub seed: String,
    pub name: String,
}

impl Entrant {
    /// Create a new entrant.
    pub fn new(seed: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            seed: seed.into(),
            name: name.into(),
        }
    }

    /// Create an unseeded entrant.
    pub fn unseeded(name: impl Into<String>) -> Self {
        Self::new("", name)
    }

    /// The identifying name with surrounding whitespace removed.
    pub fn trimmed_name(&self) -> &str {
        self.name.trim()
    }

    /// Whether this slot is a placeholder rather than a real player.
    pub fn is_placeholder(&self) -> bool {
        let name = self.trimmed_name();
        name.is_empty() || name.eq_ignore_ascii_case("TBD")
    }
}

impl From<(String, String)> for Entrant {
    fn from((seed, name): (String, String)) -> Self {
        Self { seed, name }
    }
}

impl From<Entrant> for (String, String) {
    fn from(e: Entrant) -> Self {
        (e.seed, e.name)
    }
}

/// A recorded winner or predicted pick, as found on the wire.
///
/// Legacy documents store a bare name string; newer ones store the full
/// `[seed, name]` pair. Both normalize to a trimmed bare name via
/// [`WinnerValue::name`], so nothing downstream ever branches on the shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum WinnerValue {
    Entrant(Entrant),
    Name(String),
}

impl WinnerValue {
    /// The canonical (trimmed) winner name.
    pub fn name(&self) -> &str {
        match self {
            WinnerValue::Entrant(e) => e.trimmed_name(),
            WinnerValue::Name(n) => n.trim(),
        }
    }
}

impl From<&str> for WinnerValue {
    fn from(name: &str) -> Self {
        WinnerValue::Name(name.to_string())
    }
}

impl From<String> for WinnerValue {
    fn from(name: String) -> Self {
        WinnerValue::Name(name)
    }
}

impl From<Entrant> for WinnerValue {
    fn from(entrant: Entrant) -> Self {
        WinnerValue::Entrant(entrant)
    }
}
