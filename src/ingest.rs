//! Entrants file ingestion.
//!
//! Parses the plain-text draw format into a [`Bracket`]:
//!
//! ```text
//! mens
//! Top Half (Day 1)
//! (1) J. Sinner vs Qualifier
//! A. Rublev vs (14) B. Shelton
//! Bottom Half (Day 2)
//! ...
//! womens
//! ...
//! ```
//!
//! Category lines open a section; half headers carry the play day; matchup
//! lines pair two players separated by `vs`, each optionally prefixed with
//! a parenthesized seed. A category half left empty is filled with `TBD`
//! placeholder pairings so the bracket keeps its full shape.

use std::path::Path;

use regex::Regex;
use thiserror::Error;
use tracing::{info, warn};

use crate::models::{Bracket, Entrant, Matchup};

/// Categories recognized in entrants files.
pub const CATEGORIES: [&str; 2] = ["mens", "womens"];

/// Matches per half of a 32-player draw.
pub const MATCHES_PER_HALF: usize = 8;

/// Ingestion errors.
#[derive(Debug, Error)]
pub enum IngestError {
    #[error("Failed to read entrants file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("matchup line before any category/half header: {0:?}")]
    OrphanMatchup(String),

    #[error("{category} {half} half has {count} matchups, expected {expected}")]
    WrongMatchCount {
        category: String,
        half: String,
        count: usize,
        expected: usize,
    },
}

#[derive(Debug, Default)]
struct HalfDraw {
    matchups: Vec<[Entrant; 2]>,
    day: Option<u8>,
}

#[derive(Debug, Default)]
struct CategoryDraw {
    top: HalfDraw,
    bottom: HalfDraw,
}

/// Parse an entrants file from disk.
pub fn parse_entrants_file(path: &Path) -> Result<Bracket, IngestError> {
    let text = std::fs::read_to_string(path)?;
    let bracket = parse_entrants(&text)?;
    info!(path = %path.display(), "parsed entrants file");
    Ok(bracket)
}

/// Parse entrants text into a bracket.
pub fn parse_entrants(text: &str) -> Result<Bracket, IngestError> {
    let header_re = Regex::new(r"(?i)^(top|bottom)\s+half\s+\(day\s*(\d)\)$").unwrap();
    let vs_re = Regex::new(r"(?i)\s+vs\s+").unwrap();
    let seed_re = Regex::new(r"^\((?P<seed>[^)]*)\)\s*(?P<name>.+)$").unwrap();

    let parse_player = |raw: &str| -> Entrant {
        let raw = raw.trim();
        match seed_re.captures(raw) {
            Some(caps) => Entrant::new(caps["seed"].trim(), caps["name"].trim()),
            None => Entrant::unseeded(raw),
        }
    };

    let mut draws: Vec<(&str, CategoryDraw)> = CATEGORIES
        .iter()
        .map(|c| (*c, CategoryDraw::default()))
        .collect();
    let mut current_category: Option<usize> = None;
    let mut current_half: Option<bool> = None; // true = top

    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        if let Some(idx) = CATEGORIES.iter().position(|c| line.eq_ignore_ascii_case(c)) {
            current_category = Some(idx);
            current_half = None;
            continue;
        }

        if let Some(caps) = header_re.captures(line) {
            if let Some(cat_idx) = current_category {
                let is_top = caps[1].eq_ignore_ascii_case("top");
                let day: u8 = caps[2].parse().unwrap_or(0);
                let draw = &mut draws[cat_idx].1;
                let half = if is_top { &mut draw.top } else { &mut draw.bottom };
                half.day = Some(day);
                current_half = Some(is_top);
            } else {
                warn!(line, "half header before any category line, ignoring");
            }
            continue;
        }

        if vs_re.is_match(line) {
            let (cat_idx, is_top) = match (current_category, current_half) {
                (Some(c), Some(h)) => (c, h),
                _ => return Err(IngestError::OrphanMatchup(line.to_string())),
            };

            let parts: Vec<&str> = vs_re.splitn(line, 2).collect();
            if parts.len() == 2 {
                let pair = [parse_player(parts[0]), parse_player(parts[1])];
                let draw = &mut draws[cat_idx].1;
                let half = if is_top { &mut draw.top } else { &mut draw.bottom };
                half.matchups.push(pair);
            }
        }
    }

    let mut bracket = Bracket::new();
    for (category, draw) in draws {
        let mut matchups = Vec::with_capacity(MATCHES_PER_HALF * 2);
        for (half_name, half) in [("top", draw.top), ("bottom", draw.bottom)] {
            let mut half = half;
            if half.matchups.is_empty() {
                half.matchups = placeholder_half();
            }
            if half.matchups.len() != MATCHES_PER_HALF {
                return Err(IngestError::WrongMatchCount {
                    category: category.to_string(),
                    half: half_name.to_string(),
                    count: half.matchups.len(),
                    expected: MATCHES_PER_HALF,
                });
            }
            for [first, second] in half.matchups {
                let mut matchup = Matchup::new(first, second);
                matchup.day = half.day;
                matchups.push(matchup);
            }
        }
        bracket.insert_draw(category, matchups);
    }

    Ok(bracket)
}

fn placeholder_half() -> Vec<[Entrant; 2]> {
    (0..MATCHES_PER_HALF)
        .map(|_| [Entrant::unseeded("TBD"), Entrant::unseeded("TBD")])
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_half(prefix: &str) -> String {
        (0..MATCHES_PER_HALF)
            .map(|i| format!("{}{}a vs {}{}b\n", prefix, i, prefix, i))
            .collect()
    }

    #[test]
    fn test_parse_full_draw() {
        let text = format!(
            "mens\nTop Half (Day 1)\n{}Bottom Half (Day 2)\n{}womens\nTop Half (Day 2)\n{}Bottom Half (Day 1)\n{}",
            full_half("m-t"),
            full_half("m-b"),
            full_half("w-t"),
            full_half("w-b"),
        );

        let bracket = parse_entrants(&text).unwrap();
        let mens = bracket.draw("mens").unwrap();
        assert_eq!(mens.len(), 16);
        assert_eq!(mens[0].day, Some(1));
        assert_eq!(mens[8].day, Some(2));
        assert_eq!(mens[0].players[0].name, "m-t0a");

        let womens = bracket.draw("womens").unwrap();
        assert_eq!(womens.len(), 16);
        assert_eq!(womens[0].day, Some(2));
    }

    #[test]
    fn test_parse_seeds_and_capitalization() {
        let text = format!(
            "mens\nTop Half (Day 1)\n(1) J. Sinner vs Qualifier\n{}",
            full_half("x")
                .lines()
                .skip(1)
                .map(|l| format!("{}\n", l))
                .collect::<String>()
        );
        let bracket = parse_entrants(&text).unwrap();
        let first = &bracket.draw("mens").unwrap()[0];
        assert_eq!(first.players[0], Entrant::new("1", "J. Sinner"));
        assert_eq!(first.players[1], Entrant::unseeded("Qualifier"));
    }

    #[test]
    fn test_missing_halves_get_placeholders() {
        let text = format!("mens\nTop Half (Day 1)\n{}", full_half("m"));
        let bracket = parse_entrants(&text).unwrap();

        let mens = bracket.draw("mens").unwrap();
        assert_eq!(mens.len(), 16);
        assert!(mens[8].players[0].is_placeholder());

        // Womens was absent entirely; both halves are placeholders.
        let womens = bracket.draw("womens").unwrap();
        assert_eq!(womens.len(), 16);
        assert!(womens.iter().all(|m| m.players[0].is_placeholder()));
    }

    #[test]
    fn test_wrong_match_count_is_an_error() {
        let text = "mens\nTop Half (Day 1)\nA vs B\n";
        let err = parse_entrants(text).unwrap_err();
        assert!(matches!(
            err,
            IngestError::WrongMatchCount { count: 1, .. }
        ));
    }

    #[test]
    fn test_matchup_without_header_is_an_error() {
        let err = parse_entrants("A vs B\n").unwrap_err();
        assert!(matches!(err, IngestError::OrphanMatchup(_)));
    }

    #[test]
    fn test_vs_is_case_insensitive() {
        let text = format!(
            "mens\nTop Half (Day 1)\nA VS B\n{}",
            full_half("m")
                .lines()
                .skip(1)
                .map(|l| format!("{}\n", l))
                .collect::<String>()
        );
        let bracket = parse_entrants(&text).unwrap();
        assert_eq!(bracket.draw("mens").unwrap()[0].players[1].name, "B");
    }
}
