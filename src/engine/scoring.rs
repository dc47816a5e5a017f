//! Per-participant scoring.

use std::collections::BTreeSet;

use crate::models::{ActualResults, MatchRef, PickSheet, RoundSchedule};

/// Points already earned plus points still reachable.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScoreBreakdown {
    /// Points from picks matching already-decided results.
    pub current: u32,
    /// Points from undecided picks whose predicted winner is still alive.
    pub potential: u32,
}

impl ScoreBreakdown {
    /// The theoretical maximum this participant can still finish with.
    pub fn max_score(&self) -> u32 {
        self.current + self.potential
    }
}

/// Score one pick sheet against the recorded results.
///
/// For each pick: a decided match earns the round's points iff the
/// normalized predicted name equals the normalized recorded winner; an
/// undecided match counts toward `potential` iff the predicted winner is in
/// `active`. A pick whose key does not parse, or whose round the schedule
/// does not know, is worth zero either way and never fails the pass.
///
/// Pure and order-independent: the sums do not depend on pick iteration
/// order.
pub fn score_picks(
    picks: &PickSheet,
    results: &ActualResults,
    active: &BTreeSet<String>,
    schedule: &RoundSchedule,
) -> ScoreBreakdown {
    let mut breakdown = ScoreBreakdown::default();

    for (key, pick) in picks {
        let points = key
            .parse::<MatchRef>()
            .map(|mref| schedule.points(&mref.round))
            .unwrap_or(0);
        let picked = pick.name();

        if let Some(winner) = results.winner(key) {
            if picked == winner {
                breakdown.current += points;
            }
        } else if active.contains(picked) {
            breakdown.potential += points;
        }
    }

    breakdown
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Entrant, Round, WinnerValue};

    fn schedule() -> RoundSchedule {
        RoundSchedule::new(vec![Round::new("sf", 8), Round::new("f", 13)])
    }

    fn active(values: &[&str]) -> BTreeSet<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    fn picks(entries: &[(&str, &str)]) -> PickSheet {
        entries
            .iter()
            .map(|(k, v)| (k.to_string(), WinnerValue::from(*v)))
            .collect()
    }

    #[test]
    fn test_decided_match_scores_on_exact_match() {
        let mut results = ActualResults::new();
        results.record("cat-sf-match-0", "A");

        let sheet = picks(&[("cat-sf-match-0", "A")]);
        let breakdown = score_picks(&sheet, &results, &active(&[]), &schedule());
        assert_eq!(breakdown.current, 8);
        assert_eq!(breakdown.potential, 0);
    }

    #[test]
    fn test_decided_match_wrong_pick_scores_nothing() {
        let mut results = ActualResults::new();
        results.record("cat-sf-match-0", "A");

        // B is still listed active, but the match is decided: no potential.
        let sheet = picks(&[("cat-sf-match-0", "B")]);
        let breakdown = score_picks(&sheet, &results, &active(&["B"]), &schedule());
        assert_eq!(breakdown, ScoreBreakdown::default());
    }

    #[test]
    fn test_undecided_match_counts_potential_while_alive() {
        let results = ActualResults::new();
        let sheet = picks(&[("cat-f-match-0", "D")]);

        let alive = score_picks(&sheet, &results, &active(&["D"]), &schedule());
        assert_eq!(alive.potential, 13);
        assert_eq!(alive.max_score(), 13);

        let dead = score_picks(&sheet, &results, &active(&["A"]), &schedule());
        assert_eq!(dead, ScoreBreakdown::default());
    }

    #[test]
    fn test_normalization_of_both_sides() {
        let mut results = ActualResults::new();
        results.record("cat-sf-match-0", Entrant::new("1", " A "));

        let sheet: PickSheet = [(
            "cat-sf-match-0".to_string(),
            WinnerValue::from("A  "),
        )]
        .into_iter()
        .collect();

        let breakdown = score_picks(&sheet, &results, &active(&[]), &schedule());
        assert_eq!(breakdown.current, 8);
    }

    #[test]
    fn test_unknown_round_key_is_worth_zero() {
        let mut results = ActualResults::new();
        results.record("cat-r128-match-0", "A");

        let sheet = picks(&[("cat-r128-match-0", "A"), ("garbage", "A")]);
        let breakdown = score_picks(&sheet, &results, &active(&["A"]), &schedule());
        assert_eq!(breakdown, ScoreBreakdown::default());
    }

    #[test]
    fn test_empty_picks_score_zero() {
        let breakdown = score_picks(
            &PickSheet::new(),
            &ActualResults::new(),
            &active(&["A"]),
            &schedule(),
        );
        assert_eq!(breakdown, ScoreBreakdown::default());
    }

    #[test]
    fn test_pure_function() {
        let mut results = ActualResults::new();
        results.record("cat-sf-match-0", "A");
        let sheet = picks(&[("cat-sf-match-0", "A"), ("cat-f-match-0", "A")]);
        let alive = active(&["A"]);

        let first = score_picks(&sheet, &results, &alive, &schedule());
        let second = score_picks(&sheet, &results, &alive, &schedule());
        assert_eq!(first, second);
        assert_eq!(first.current, 8);
        assert_eq!(first.potential, 13);
        assert_eq!(first.max_score(), 21);
    }
}
