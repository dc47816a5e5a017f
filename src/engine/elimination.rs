//! Elimination inference.
//!
//! Eliminated-ness cannot be read off a static list: the loser of a match
//! is only knowable once its winner is recorded, and who even plays a
//! later-round match is only knowable once the feeders are decided. So this
//! module makes a single pass over every recorded result, resolves each
//! match independently, and unions the inferred losers.

use std::collections::BTreeSet;

use tracing::trace;

use crate::models::{ActualResults, Bracket, MatchRef, RoundSchedule};

use super::resolver::resolve_occupants;
use super::EngineError;

/// Every entrant who has definitively lost a resolved match.
///
/// A recorded result is only meaningful when both occupants are known and
/// the winner is one of them; anything else (a later-round result recorded
/// before its feeders, a winner matching neither occupant, a placeholder
/// slot) is skipped silently. The results feed is allowed to be temporarily
/// inconsistent. Malformed match keys, by contrast, are fatal.
///
/// Recomputed from scratch on every call; there is no incremental state.
pub fn eliminated_players(
    bracket: &Bracket,
    schedule: &RoundSchedule,
    results: &ActualResults,
) -> Result<BTreeSet<String>, EngineError> {
    let mut eliminated = BTreeSet::new();

    for (key, winner) in results.iter() {
        let mref: MatchRef = key.parse()?;
        let (first, second) = resolve_occupants(bracket, schedule, &mref, results)?;

        let (first, second) = match (first, second) {
            (Some(a), Some(b)) if !a.is_empty() && !b.is_empty() => (a, b),
            _ => {
                trace!(%mref, "occupants not yet resolved, skipping");
                continue;
            }
        };

        let winner = winner.name();
        if winner == first {
            eliminated.insert(second);
        } else if winner == second {
            eliminated.insert(first);
        } else {
            trace!(%mref, winner, "recorded winner matches neither occupant, skipping");
        }
    }

    Ok(eliminated)
}

/// Entrants still alive: the full first-round universe minus everyone
/// inferred eliminated.
pub fn active_players(bracket: &Bracket, eliminated: &BTreeSet<String>) -> BTreeSet<String> {
    bracket
        .all_entrants()
        .difference(eliminated)
        .cloned()
        .collect()
}
