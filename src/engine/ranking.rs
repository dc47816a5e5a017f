//! Leaderboard ranking.

use crate::models::LeaderboardEntry;

/// Sort entries by score descending and assign standard competition ranks:
/// ties share the rank of the first entry at that score, and the next
/// distinct score resumes at its 1-based position (1, 2, 2, 4).
///
/// The sort is stable, so exact ties keep their input order.
pub fn assign_ranks(entries: &mut [LeaderboardEntry]) {
    entries.sort_by(|a, b| b.score.cmp(&a.score));

    let mut rank = 0u32;
    let mut last_score = None;
    for (i, entry) in entries.iter_mut().enumerate() {
        if last_score != Some(entry.score) {
            rank = (i + 1) as u32;
            last_score = Some(entry.score);
        }
        entry.rank = rank;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PickSheet;

    fn entry(name: &str, score: u32) -> LeaderboardEntry {
        LeaderboardEntry {
            name: name.to_string(),
            full_name: name.to_string(),
            score,
            max_score: score,
            rank: 0,
            picks: PickSheet::new(),
        }
    }

    #[test]
    fn test_competition_ranking() {
        let mut entries = vec![
            entry("c", 30),
            entry("a", 50),
            entry("b", 50),
            entry("d", 10),
        ];
        assign_ranks(&mut entries);

        let ranked: Vec<(&str, u32)> = entries
            .iter()
            .map(|e| (e.name.as_str(), e.rank))
            .collect();
        assert_eq!(ranked, vec![("a", 1), ("b", 1), ("c", 3), ("d", 4)]);
    }

    #[test]
    fn test_all_tied() {
        let mut entries = vec![entry("a", 10), entry("b", 10), entry("c", 10)];
        assign_ranks(&mut entries);
        assert!(entries.iter().all(|e| e.rank == 1));
    }

    #[test]
    fn test_empty_list() {
        let mut entries: Vec<LeaderboardEntry> = vec![];
        assign_ranks(&mut entries);
        assert!(entries.is_empty());
    }

    #[test]
    fn test_ties_keep_input_order() {
        let mut entries = vec![entry("first", 20), entry("second", 20)];
        assign_ranks(&mut entries);
        assert_eq!(entries[0].name, "first");
        assert_eq!(entries[1].name, "second");
    }
}
