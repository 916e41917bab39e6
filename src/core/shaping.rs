use crate::models::{Match, MatchTier};

/// Default score floor; every computed match already clears it
pub const DEFAULT_MIN_SCORE: usize = 1;

/// Default number of matches surfaced on a card list
pub const DEFAULT_TOP_COUNT: usize = 5;

/// Terms listed before a perfect-tier summary collapses the tail
const PERFECT_TERM_PREVIEW: usize = 3;

/// Retain only matches at or above `min_score`
///
/// Exists for callers that want a stricter floor than the construction
/// guarantee of score >= 1.
pub fn filter_by_minimum_score(matches: Vec<Match<'_>>, min_score: usize) -> Vec<Match<'_>> {
    matches
        .into_iter()
        .filter(|m| m.score >= min_score)
        .collect()
}

/// First `count` entries of an already-ranked list
///
/// Never re-sorts; ordering is the caller's responsibility.
pub fn top_matches(mut matches: Vec<Match<'_>>, count: usize) -> Vec<Match<'_>> {
    matches.truncate(count);
    matches
}

/// Tier-specific one-line summary for a match card
pub fn describe(m: &Match<'_>) -> String {
    match m.tier {
        MatchTier::Perfect => {
            let preview: Vec<&str> = m
                .matched_terms
                .iter()
                .take(PERFECT_TERM_PREVIEW)
                .map(String::as_str)
                .collect();
            let remaining = m.matched_terms.len().saturating_sub(PERFECT_TERM_PREVIEW);

            if remaining > 0 {
                format!(
                    "Perfect match: covers {} and {} more.",
                    preview.join(", "),
                    remaining
                )
            } else {
                format!("Perfect match: covers {}.", preview.join(", "))
            }
        }
        MatchTier::Good => format!("Good match: covers {}.", m.matched_terms.join(" and ")),
        MatchTier::Potential => {
            let first = m.matched_terms.first().map(String::as_str).unwrap_or("");
            format!("Potential match: covers {}.", first)
        }
    }
}
