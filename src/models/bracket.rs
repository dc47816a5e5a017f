//! The initial draw for each category.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use super::Entrant;

/// One first-round pairing, optionally tagged with the day it is scheduled
/// to be played.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Matchup {
    pub players: [Entrant; 2],

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub day: Option<u8>,
}

impl Matchup {
    pub fn new(first: Entrant, second: Entrant) -> Self {
        Self {
            players: [first, second],
            day: None,
        }
    }

    pub fn with_day(mut self, day: u8) -> Self {
        self.day = Some(day);
        self
    }
}

/// The full first-round draw of a tournament, keyed by category
/// (`mens`, `womens`, ...). Categories are structurally identical and are
/// never cross-referenced.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Bracket {
    draws: BTreeMap<String, Vec<Matchup>>,
}

impl Bracket {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace the draw for one category.
    pub fn insert_draw(&mut self, category: impl Into<String>, matchups: Vec<Matchup>) {
        self.draws.insert(category.into(), matchups);
    }

    /// The first-round matchups for a category.
    pub fn draw(&self, category: &str) -> Option<&[Matchup]> {
        self.draws.get(category).map(Vec::as_slice)
    }

    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.draws.keys().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.draws.is_empty()
    }

    /// Every name in the original draw, across all categories and both
    /// slots of every first-round match.
    pub fn all_entrants(&self) -> BTreeSet<String> {
        self.draws
            .values()
            .flatten()
            .flat_map(|m| m.players.iter())
            .map(|p| p.trimmed_name().to_string())
            .collect()
    }

    /// Per-category name -> seed lookup, bundled into the viewer document
    /// for rendering.
    pub fn seed_map(&self) -> BTreeMap<String, BTreeMap<String, String>> {
        self.draws
            .iter()
            .map(|(category, matchups)| {
                let seeds = matchups
                    .iter()
                    .flat_map(|m| m.players.iter())
                    .map(|p| (p.trimmed_name().to_string(), p.seed.clone()))
                    .collect();
                (category.clone(), seeds)
            })
            .collect()
    }

    /// Accept legacy documents whose draws are keyed `mens_draw`,
    /// `womens_draw`, and so on; strips the suffix.
    pub fn normalize_keys(self) -> Self {
        let draws = self
            .draws
            .into_iter()
            .map(|(k, v)| (k.trim_end_matches("_draw").to_string(), v))
            .collect();
        Self { draws }
    }
}
