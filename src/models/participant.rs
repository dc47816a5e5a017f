//! Participant input records and leaderboard output rows.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::WinnerValue;

/// A participant's predictions, keyed by match key. Sparse: an unpicked
/// match earns no points and costs none.
pub type PickSheet = BTreeMap<String, WinnerValue>;

/// A submitted bracket, as stored per participant.
///
/// Field names match the participant documents of the live service
/// (camelCase on the wire). Only locked participants are scored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Participant {
    pub nickname: String,

    #[serde(default)]
    pub full_name: Option<String>,

    #[serde(default)]
    pub is_locked: bool,

    #[serde(default)]
    pub picks: PickSheet,
}

impl Participant {
    /// Create a locked participant with the given picks.
    pub fn new(nickname: impl Into<String>, picks: PickSheet) -> Self {
        Self {
            nickname: nickname.into(),
            full_name: None,
            is_locked: true,
            picks,
        }
    }

    pub fn with_full_name(mut self, full_name: impl Into<String>) -> Self {
        self.full_name = Some(full_name.into());
        self
    }

    pub fn unlocked(mut self) -> Self {
        self.is_locked = false;
        self
    }
}

/// One scored row of the leaderboard, as published in the viewer document.
///
/// `score` is points already earned; `max_score` adds the points still
/// reachable from undecided picks whose predicted winner is alive. Picks are
/// echoed back for rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub name: String,

    #[serde(rename = "fullName")]
    pub full_name: String,

    pub score: u32,

    pub max_score: u32,

    pub rank: u32,

    pub picks: PickSheet,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_participant_wire_format() {
        let json = r#"{
            "nickname": "alice",
            "fullName": "Alice Example",
            "isLocked": true,
            "picks": { "mens-f-match-0": ["1", "J. Sinner"] }
        }"#;
        let p: Participant = serde_json::from_str(json).unwrap();
        assert_eq!(p.nickname, "alice");
        assert_eq!(p.full_name.as_deref(), Some("Alice Example"));
        assert!(p.is_locked);
        assert_eq!(p.picks["mens-f-match-0"].name(), "J. Sinner");
    }

    #[test]
    fn test_participant_defaults() {
        let p: Participant = serde_json::from_str(r#"{"nickname": "bob"}"#).unwrap();
        assert!(!p.is_locked);
        assert!(p.full_name.is_none());
        assert!(p.picks.is_empty());
    }

    #[test]
    fn test_leaderboard_entry_wire_names() {
        let entry = LeaderboardEntry {
            name: "alice".to_string(),
            full_name: "Alice Example".to_string(),
            score: 10,
            max_score: 23,
            rank: 1,
            picks: PickSheet::new(),
        };
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["fullName"], "Alice Example");
        assert_eq!(json["max_score"], 23);
    }
}
