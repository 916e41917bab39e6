use crate::core::normalize::{SynonymTable, TermNormalizer};
use crate::core::scoring::overlap_terms;
use crate::models::{Match, MatchTier, Profile};

/// Result of the matching process
#[derive(Debug)]
pub struct MatchResult<'a> {
    pub matches: Vec<Match<'a>>,
    pub total_candidates: usize,
}

/// Main matching engine
///
/// Compares a caller's terms against a candidate pool in two directions:
/// forward (caller asks vs. candidate gives) and reverse (caller gives
/// vs. candidate asks). Pure and stateless; the only injected piece is
/// the term normalizer with its synonym table.
#[derive(Debug, Clone)]
pub struct MatchEngine {
    normalizer: TermNormalizer,
}

impl MatchEngine {
    pub fn new(normalizer: TermNormalizer) -> Self {
        Self { normalizer }
    }

    pub fn with_builtin_synonyms() -> Self {
        Self::new(TermNormalizer::new(SynonymTable::builtin()))
    }

    /// Forward matching: the caller's asks against each candidate's gives
    ///
    /// Candidates with no gives, or with no exact-or-fuzzy overlap, are
    /// excluded. Ranked by score descending, then popularity descending;
    /// the sort is stable, so full ties keep their input order.
    pub fn find_matches<'a>(
        &self,
        caller_asks: &[String],
        candidates: &'a [Profile],
    ) -> MatchResult<'a> {
        let mut result = self.collect_overlaps(caller_asks, candidates, |p| p.gives.as_slice());

        result.matches.sort_by(|a, b| {
            b.score
                .cmp(&a.score)
                .then_with(|| b.profile.popularity.cmp(&a.profile.popularity))
        });

        result
    }

    /// Reverse matching: the caller's gives against each candidate's asks
    ///
    /// Ranked by score descending only; reverse mode carries no
    /// popularity tie-break.
    pub fn find_reverse_matches<'a>(
        &self,
        caller_gives: &[String],
        candidates: &'a [Profile],
    ) -> MatchResult<'a> {
        let mut result = self.collect_overlaps(caller_gives, candidates, |p| p.asks.as_slice());

        result.matches.sort_by(|a, b| b.score.cmp(&a.score));

        result
    }

    fn collect_overlaps<'a>(
        &self,
        caller_terms: &[String],
        candidates: &'a [Profile],
        opposing: impl Fn(&'a Profile) -> &'a [String],
    ) -> MatchResult<'a> {
        let total_candidates = candidates.len();

        if caller_terms.is_empty() {
            return MatchResult {
                matches: Vec::new(),
                total_candidates,
            };
        }

        let matches = candidates
            .iter()
            .filter_map(|profile| {
                let candidate_terms = opposing(profile);
                if candidate_terms.is_empty() {
                    return None;
                }

                let matched_terms = overlap_terms(caller_terms, candidate_terms, &self.normalizer);
                if matched_terms.is_empty() {
                    return None;
                }

                let score = matched_terms.len();
                Some(Match {
                    profile,
                    score,
                    tier: MatchTier::from_score(score),
                    matched_terms,
                })
            })
            .collect();

        MatchResult {
            matches,
            total_candidates,
        }
    }
}

impl Default for MatchEngine {
    fn default() -> Self {
        Self::with_builtin_synonyms()
    }
}
