//! The denormalized viewer document.
//!
//! Everything the rendering layer needs in one place: the ranked
//! leaderboard (picks included), the raw results, the eliminated-player
//! list, and the per-category seed lookup. Rebuilt wholesale after every
//! results change; nothing is patched incrementally.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::engine::{self, EngineError};
use crate::models::{ActualResults, Bracket, LeaderboardEntry, Participant, RoundSchedule};

/// The published scoreboard document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ViewerData {
    pub participants: Vec<LeaderboardEntry>,

    pub actual_results: ActualResults,

    /// Sorted for stable output.
    pub eliminated_players: Vec<String>,

    /// category -> (name -> seed), derived from the initial bracket.
    pub seed_map: BTreeMap<String, BTreeMap<String, String>>,

    pub generated_at: DateTime<Utc>,
}

impl ViewerData {
    /// Run a full scoring pass and assemble the document.
    pub fn build(
        bracket: &Bracket,
        schedule: &RoundSchedule,
        results: &ActualResults,
        participants: &[Participant],
    ) -> Result<Self, EngineError> {
        let board = engine::score_tournament(bracket, schedule, results, participants)?;

        Ok(Self {
            participants: board.entries,
            actual_results: results.clone(),
            eliminated_players: board.eliminated.into_iter().collect(),
            seed_map: bracket.seed_map(),
            generated_at: Utc::now(),
        })
    }
}
