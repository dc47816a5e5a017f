//! Round schedule and bracket topology math.
//!
//! A schedule lists the rounds of one draw in playing order, each with its
//! point value. Point values must strictly increase as the tournament
//! progresses; the table itself is configuration (see `config`), not a
//! global.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Schedule validation errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScheduleError {
    #[error("round schedule is empty")]
    Empty,

    #[error("duplicate round key: {0}")]
    DuplicateRound(String),

    #[error("points for round {0} do not increase over the previous round")]
    PointsNotIncreasing(String),

    #[error("first round has {0} matches, which is not a power of two")]
    NotPowerOfTwo(usize),

    #[error("schedule has {rounds} rounds but a draw of {matches} first-round matches needs {expected}")]
    DepthMismatch {
        rounds: usize,
        matches: usize,
        expected: usize,
    },
}

/// One round of the draw: its short key and its point value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Round {
    pub key: String,
    pub points: u32,
}

impl Round {
    pub fn new(key: impl Into<String>, points: u32) -> Self {
        Self {
            key: key.into(),
            points,
        }
    }
}

/// The ordered rounds of a draw, first round first, final last.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoundSchedule {
    rounds: Vec<Round>,
}

impl Default for RoundSchedule {
    /// The canonical 32-player table: `r32:2, r16:3, qf:5, sf:8, f:13`.
    fn default() -> Self {
        Self::new(vec![
            Round::new("r32", 2),
            Round::new("r16", 3),
            Round::new("qf", 5),
            Round::new("sf", 8),
            Round::new("f", 13),
        ])
    }
}

impl RoundSchedule {
    pub fn new(rounds: Vec<Round>) -> Self {
        Self { rounds }
    }

    pub fn rounds(&self) -> &[Round] {
        &self.rounds
    }

    /// Position of a round in playing order, if the key is known.
    pub fn index_of(&self, key: &str) -> Option<usize> {
        self.rounds.iter().position(|r| r.key == key)
    }

    /// The first round of the draw.
    pub fn first_round(&self) -> Option<&Round> {
        self.rounds.first()
    }

    /// The round played immediately before `key`. `None` for the first
    /// round or an unknown key.
    pub fn previous(&self, key: &str) -> Option<&Round> {
        let idx = self.index_of(key)?;
        idx.checked_sub(1).map(|i| &self.rounds[i])
    }

    /// Point value for a round. Unknown keys are worth zero; a stale pick
    /// must never fail the whole scoring pass.
    pub fn points(&self, key: &str) -> u32 {
        self.index_of(key).map_or(0, |i| self.rounds[i].points)
    }

    /// Number of matches in round `round_index` of a draw whose first round
    /// has `first_round_matches` matches. Each round halves the field.
    pub fn matches_in_round(&self, first_round_matches: usize, round_index: usize) -> usize {
        first_round_matches >> round_index
    }

    /// Check the schedule itself: non-empty, unique keys, strictly
    /// increasing point values.
    pub fn validate(&self) -> Result<(), ScheduleError> {
        if self.rounds.is_empty() {
            return Err(ScheduleError::Empty);
        }

        let mut prev_points = None;
        for (i, round) in self.rounds.iter().enumerate() {
            if self.rounds[..i].iter().any(|r| r.key == round.key) {
                return Err(ScheduleError::DuplicateRound(round.key.clone()));
            }
            if let Some(prev) = prev_points {
                if round.points <= prev {
                    return Err(ScheduleError::PointsNotIncreasing(round.key.clone()));
                }
            }
            prev_points = Some(round.points);
        }

        Ok(())
    }

    /// Check that a draw of the given size fits this schedule: the match
    /// count must be a power of two, and halving it once per round must
    /// reach exactly one match in the final.
    pub fn validate_draw(&self, first_round_matches: usize) -> Result<(), ScheduleError> {
        if !first_round_matches.is_power_of_two() {
            return Err(ScheduleError::NotPowerOfTwo(first_round_matches));
        }

        let expected = first_round_matches.trailing_zeros() as usize + 1;
        if self.rounds.len() != expected {
            return Err(ScheduleError::DepthMismatch {
                rounds: self.rounds.len(),
                matches: first_round_matches,
                expected,
            });
        }

        Ok(())
    }
}
