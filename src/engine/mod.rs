//! Scoring and elimination-inference engine.
//!
//! Pure, synchronous computation over a snapshot of three inputs:
//! - the initial bracket (topology plus first-round pairings),
//! - the recorded results (match key -> winner, sparse),
//! - the participants and their pick sheets.
//!
//! Data flows topology -> occupant resolution -> elimination inference ->
//! per-participant scoring -> ranking. Nothing here does I/O or keeps state
//! between invocations; callers re-run the whole pass whenever the results
//! change.

mod elimination;
mod ranking;
mod resolver;
mod scoring;

pub use elimination::{active_players, eliminated_players};
pub use ranking::assign_ranks;
pub use resolver::{resolve_occupants, Occupants};
pub use scoring::{score_picks, ScoreBreakdown};

use std::collections::BTreeSet;

use thiserror::Error;
use tracing::debug;

use crate::models::{
    ActualResults, Bracket, LeaderboardEntry, MatchKeyError, Participant, RoundSchedule,
};

/// Errors for references that do not exist in the bracket topology.
///
/// These are fail-fast: the engine never silently substitutes a wrong
/// occupant. Tolerance for merely *inconsistent* result data lives in
/// [`eliminated_players`] instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("malformed match key: {0:?}")]
    MalformedMatchKey(String),

    #[error("unknown category: {0:?}")]
    UnknownCategory(String),

    #[error("unknown round key: {0:?}")]
    UnknownRound(String),

    #[error("match index {index} out of range for round {round} ({count} matches)")]
    MatchIndexOutOfRange {
        round: String,
        index: usize,
        count: usize,
    },
}

impl From<MatchKeyError> for EngineError {
    fn from(err: MatchKeyError) -> Self {
        EngineError::MalformedMatchKey(err.0)
    }
}

/// Output of one full scoring pass.
#[derive(Debug, Clone)]
pub struct Scoreboard {
    /// Ranked leaderboard entries, best score first.
    pub entries: Vec<LeaderboardEntry>,
    /// Everyone inferred eliminated from the recorded results.
    pub eliminated: BTreeSet<String>,
}

/// Run the whole pipeline: infer eliminations, score every locked
/// participant, assign ranks.
///
/// Participants that never locked in their picks are skipped entirely.
pub fn score_tournament(
    bracket: &Bracket,
    schedule: &RoundSchedule,
    results: &ActualResults,
    participants: &[Participant],
) -> Result<Scoreboard, EngineError> {
    let eliminated = eliminated_players(bracket, schedule, results)?;
    let active = active_players(bracket, &eliminated);
    debug!(
        eliminated = eliminated.len(),
        active = active.len(),
        results = results.len(),
        "inferred elimination state"
    );

    let mut entries = Vec::with_capacity(participants.len());
    for participant in participants {
        if !participant.is_locked {
            debug!(nickname = %participant.nickname, "skipping unlocked participant");
            continue;
        }

        let breakdown = score_picks(&participant.picks, results, &active, schedule);
        entries.push(LeaderboardEntry {
            name: participant.nickname.clone(),
            full_name: participant
                .full_name
                .clone()
                .unwrap_or_else(|| "Unknown".to_string()),
            score: breakdown.current,
            max_score: breakdown.max_score(),
            rank: 0,
            picks: participant.picks.clone(),
        });
    }

    assign_ranks(&mut entries);
    debug!(entries = entries.len(), "scored leaderboard");

    Ok(Scoreboard {
        entries,
        eliminated,
    })
}

/// Convenience wrapper when the caller only wants the ranked entries.
pub fn build_leaderboard(
    bracket: &Bracket,
    schedule: &RoundSchedule,
    results: &ActualResults,
    participants: &[Participant],
) -> Result<Vec<LeaderboardEntry>, EngineError> {
    Ok(score_tournament(bracket, schedule, results, participants)?.entries)
}
