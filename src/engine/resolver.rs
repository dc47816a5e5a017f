//! Match occupant resolution.

use crate::models::{ActualResults, Bracket, MatchRef, RoundSchedule};

use super::EngineError;

/// The two names occupying a match's slots, where known. A `None` slot
/// means the feeder match has not been decided yet.
pub type Occupants = (Option<String>, Option<String>);

/// Work out who plays in a match.
///
/// First-round occupants come straight from the static draw and are always
/// both present. For any later round the occupants are the recorded winners
/// of the two feeder matches in the immediately preceding round; a feeder
/// without a recorded result leaves its slot `None`. No deeper recursion is
/// needed: a match's occupants are only considered known once both feeders
/// have actually been decided, not merely inferable.
///
/// A reference that does not exist in the topology (unknown category or
/// round, index past the round's match count) is an error, never a silent
/// `(None, None)`.
pub fn resolve_occupants(
    bracket: &Bracket,
    schedule: &RoundSchedule,
    mref: &MatchRef,
    results: &ActualResults,
) -> Result<Occupants, EngineError> {
    let draw = bracket
        .draw(&mref.category)
        .ok_or_else(|| EngineError::UnknownCategory(mref.category.clone()))?;
    let round_index = schedule
        .index_of(&mref.round)
        .ok_or_else(|| EngineError::UnknownRound(mref.round.clone()))?;

    let count = schedule.matches_in_round(draw.len(), round_index);
    if mref.index >= count {
        return Err(EngineError::MatchIndexOutOfRange {
            round: mref.round.clone(),
            index: mref.index,
            count,
        });
    }

    if round_index == 0 {
        let matchup = &draw[mref.index];
        return Ok((
            Some(matchup.players[0].trimmed_name().to_string()),
            Some(matchup.players[1].trimmed_name().to_string()),
        ));
    }

    let prev = &schedule.rounds()[round_index - 1];
    let (first_feeder, second_feeder) = mref.feeders(&prev.key);
    Ok((
        results.winner(&first_feeder.key()).map(str::to_string),
        results.winner(&second_feeder.key()).map(str::to_string),
    ))
}
