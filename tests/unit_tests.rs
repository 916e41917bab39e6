// Unit tests for Buffalo Match

use buffalo_match::core::{normalize, shaping, MatchEngine, SynonymTable, TermNormalizer};
use buffalo_match::models::{MatchTier, Profile};

fn terms(raw: &[&str]) -> Vec<String> {
    raw.iter().map(|t| (*t).to_string()).collect()
}

fn profile_with_gives(id: &str, gives: &[&str], popularity: u64) -> Profile {
    let mut p = Profile::new(id, format!("Project {}", id));
    p.gives = terms(gives);
    p.popularity = popularity;
    p
}

fn profile_with_asks(id: &str, asks: &[&str]) -> Profile {
    let mut p = Profile::new(id, format!("Project {}", id));
    p.asks = terms(asks);
    p
}

#[test]
fn test_normalize_trims_and_lowercases() {
    assert_eq!(normalize("  Design  "), "design");
    assert_eq!(normalize("Co-Founder"), "co-founder");
}

#[test]
fn test_fuzzy_match_substring_stage() {
    let normalizer = TermNormalizer::default();
    assert!(normalizer.is_fuzzy_match("designer", "design"));
    assert!(normalizer.is_fuzzy_match("design", "designer"));
    assert!(!normalizer.is_fuzzy_match("legal", "marketing"));
}

#[test]
fn test_fuzzy_match_synonym_stage() {
    let normalizer = TermNormalizer::default();
    assert!(normalizer.is_fuzzy_match("critique", "review"));
    assert!(normalizer.is_fuzzy_match("capital", "investment"));
    assert!(normalizer.is_fuzzy_match("founding team", "co-founder"));
}

// P1: empty caller terms always yield an empty result, both directions
#[test]
fn test_empty_input_no_false_positives() {
    let engine = MatchEngine::with_builtin_synonyms();
    let candidates = vec![
        profile_with_gives("a", &["design"], 0),
        profile_with_gives("b", &["code"], 0),
    ];

    assert!(engine.find_matches(&[], &candidates).matches.is_empty());
    assert!(engine
        .find_reverse_matches(&[], &candidates)
        .matches
        .is_empty());
}

// P2: matched_terms length always equals score
#[test]
fn test_score_length_invariant() {
    let engine = MatchEngine::with_builtin_synonyms();
    let candidates = vec![
        profile_with_gives("a", &["UX", "Developer", "Coaching", "legal"], 0),
        profile_with_gives("b", &["feedback"], 0),
        profile_with_gives("c", &["design", "critique"], 0),
    ];

    let result = engine.find_matches(&terms(&["design", "code", "mentor", "feedback"]), &candidates);

    assert!(!result.matches.is_empty());
    for m in &result.matches {
        assert_eq!(m.matched_terms.len(), m.score);
    }
}

// P3: tier boundaries at 3 / 2 / 1
#[test]
fn test_tier_boundaries() {
    let engine = MatchEngine::with_builtin_synonyms();
    let candidates = vec![
        profile_with_gives("one", &["design"], 0),
        profile_with_gives("two", &["design", "code"], 0),
        profile_with_gives("three", &["design", "code", "mentor"], 0),
        profile_with_gives("four", &["design", "code", "mentor", "funding"], 0),
    ];

    let result = engine.find_matches(&terms(&["design", "code", "mentor", "funding"]), &candidates);

    for m in &result.matches {
        match m.score {
            s if s >= 3 => assert_eq!(m.tier, MatchTier::Perfect),
            2 => assert_eq!(m.tier, MatchTier::Good),
            _ => assert_eq!(m.tier, MatchTier::Potential),
        }
    }
}

// P4: candidates with no overlap never appear
#[test]
fn test_non_overlapping_candidates_excluded() {
    let engine = MatchEngine::with_builtin_synonyms();
    let candidates = vec![
        profile_with_gives("match", &["feedback"], 0),
        profile_with_gives("no-match", &["accounting", "legal"], 0),
    ];

    let result = engine.find_matches(&terms(&["feedback"]), &candidates);

    assert_eq!(result.matches.len(), 1);
    assert!(result.matches.iter().all(|m| m.profile.id != "no-match"));
}

// P5: forward sort is score desc, popularity desc, stable
#[test]
fn test_forward_sort_order() {
    let engine = MatchEngine::with_builtin_synonyms();
    let candidates = vec![
        profile_with_gives("x", &["design", "code"], 10),
        profile_with_gives("y", &["design", "code"], 50),
        profile_with_gives("tie-a", &["design"], 7),
        profile_with_gives("tie-b", &["design"], 7),
    ];

    let result = engine.find_matches(&terms(&["design", "code"]), &candidates);

    let ids: Vec<&str> = result.matches.iter().map(|m| m.profile.id.as_str()).collect();
    assert_eq!(ids, vec!["y", "x", "tie-a", "tie-b"]);
}

// P6: normalization makes matching case/whitespace insensitive
#[test]
fn test_case_whitespace_insensitivity() {
    let engine = MatchEngine::with_builtin_synonyms();
    let candidates = vec![profile_with_gives("a", &["design"], 0)];

    let result = engine.find_matches(&terms(&["  Design  "]), &candidates);
    assert_eq!(result.matches.len(), 1);
}

// Scenario 1 from the product suite
#[test]
fn test_scenario_single_feedback_ask() {
    let engine = MatchEngine::with_builtin_synonyms();
    let candidates = vec![
        profile_with_gives("a", &["feedback", "mentorship"], 0),
        profile_with_gives("b", &["funding"], 0),
    ];

    let result = engine.find_matches(&terms(&["feedback"]), &candidates);

    assert_eq!(result.matches.len(), 1);
    let m = &result.matches[0];
    assert_eq!(m.profile.id, "a");
    assert_eq!(m.score, 1);
    assert_eq!(m.tier, MatchTier::Potential);
    assert_eq!(m.matched_terms, terms(&["feedback"]));
}

// Scenario 2: fuzzy matches across synonym groups, give-list order kept
#[test]
fn test_scenario_fuzzy_perfect_match() {
    let engine = MatchEngine::with_builtin_synonyms();
    let candidates = vec![profile_with_gives(
        "a",
        &["UX", "Developer", "Coaching", "legal"],
        0,
    )];

    let result = engine.find_matches(&terms(&["design", "code", "mentor"]), &candidates);

    let m = &result.matches[0];
    assert_eq!(m.score, 3);
    assert_eq!(m.tier, MatchTier::Perfect);
    assert_eq!(m.matched_terms, terms(&["UX", "Developer", "Coaching"]));
}

// Scenario 3: popularity breaks score ties in forward mode
#[test]
fn test_scenario_popularity_tiebreak() {
    let engine = MatchEngine::with_builtin_synonyms();
    let candidates = vec![
        profile_with_gives("x", &["design", "code"], 10),
        profile_with_gives("y", &["design", "code"], 50),
    ];

    let result = engine.find_matches(&terms(&["design", "code"]), &candidates);

    assert_eq!(result.matches[0].profile.id, "y");
    assert_eq!(result.matches[1].profile.id, "x");
}

// Scenario 4: empty gives never appear forward
#[test]
fn test_scenario_empty_gives_excluded() {
    let engine = MatchEngine::with_builtin_synonyms();
    let candidates = vec![profile_with_gives("empty", &[], 1000)];

    let result = engine.find_matches(&terms(&["design", "code", "mentor"]), &candidates);
    assert!(result.matches.is_empty());
}

// Scenario 5: perfect-tier description collapses the tail
#[test]
fn test_scenario_describe_perfect_tail() {
    let engine = MatchEngine::with_builtin_synonyms();
    let candidates = vec![profile_with_gives("a", &["a-term", "b-term", "c-term", "d-term"], 0)];

    let result = engine.find_matches(
        &terms(&["a-term", "b-term", "c-term", "d-term"]),
        &candidates,
    );

    let text = shaping::describe(&result.matches[0]);
    assert!(text.ends_with("and 1 more."), "got: {}", text);
}

// Scenario 6: reverse mode matches via the synonym table
#[test]
fn test_scenario_reverse_synonym_match() {
    let engine = MatchEngine::with_builtin_synonyms();
    let candidates = vec![profile_with_asks("seeker", &["mentor", "funding"])];

    let result = engine.find_reverse_matches(&terms(&["mentorship"]), &candidates);

    assert_eq!(result.matches.len(), 1);
    assert_eq!(result.matches[0].score, 1);
}

#[test]
fn test_reverse_skips_candidates_without_asks() {
    let engine = MatchEngine::with_builtin_synonyms();
    let candidates = vec![profile_with_gives("gives-only", &["design"], 0)];

    let result = engine.find_reverse_matches(&terms(&["design"]), &candidates);
    assert!(result.matches.is_empty());
}

#[test]
fn test_custom_synonym_table_injection() {
    let mut table = SynonymTable::builtin();
    table.extend(
        "legal",
        vec!["legal".to_string(), "lawyer".to_string(), "contract".to_string()],
    );
    let engine = MatchEngine::new(TermNormalizer::new(table));

    let candidates = vec![profile_with_gives("a", &["contract review"], 0)];
    let result = engine.find_matches(&terms(&["lawyer"]), &candidates);

    assert_eq!(result.matches.len(), 1);
}
