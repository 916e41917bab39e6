/// Built-in synonym groups covering the concepts builders ask for most.
///
/// Each group maps a canonical concept to variant substrings; two terms
/// are synonym-equivalent when one group has a variant contained in each.
const BUILTIN_GROUPS: &[(&str, &[&str])] = &[
    ("feedback", &["feedback", "critique", "review", "input"]),
    ("design", &["design", "designer", "designing", "ui", "ux"]),
    ("code", &["code", "coding", "developer", "programming"]),
    ("mentor", &["mentor", "mentorship", "coaching", "guidance"]),
    ("funding", &["funding", "investment", "capital", "money"]),
    ("cofounder", &["co-founder", "cofounder", "partner", "founding team"]),
];

/// Produce the canonical comparable form of a term
///
/// Used for exact-match comparison: trims surrounding whitespace and
/// lowercases. Fuzzy comparison applies further stripping on top.
pub fn normalize(term: &str) -> String {
    term.trim().to_lowercase()
}

/// Lowercase and drop every non-alphanumeric character
///
/// "Co-Founder" and "cofounder" collapse to the same string here, which
/// is what makes stage-1 substring containment robust to punctuation.
fn strip_non_alphanumeric(term: &str) -> String {
    term.to_lowercase()
        .chars()
        .filter(|c| c.is_alphanumeric())
        .collect()
}

/// Immutable concept -> variants mapping backing stage 2 of fuzzy matching
///
/// Injected into [`TermNormalizer`] at construction; never varied per
/// call. Deployments can merge extra groups over the built-in table via
/// configuration.
#[derive(Debug, Clone)]
pub struct SynonymTable {
    groups: Vec<SynonymGroup>,
}

#[derive(Debug, Clone)]
struct SynonymGroup {
    concept: String,
    variants: Vec<String>,
}

impl SynonymTable {
    /// The fixed table shipped with the engine
    pub fn builtin() -> Self {
        let groups = BUILTIN_GROUPS
            .iter()
            .map(|(concept, variants)| SynonymGroup {
                concept: (*concept).to_string(),
                variants: variants.iter().map(|v| (*v).to_string()).collect(),
            })
            .collect();
        Self { groups }
    }

    /// An empty table; only substring containment will fire
    pub fn empty() -> Self {
        Self { groups: Vec::new() }
    }

    /// Merge variants into the group for `concept`, creating the group if
    /// it does not exist yet. Variants are stored lowercased.
    pub fn extend<I>(&mut self, concept: &str, variants: I)
    where
        I: IntoIterator<Item = String>,
    {
        let concept = concept.trim().to_lowercase();
        let incoming: Vec<String> = variants
            .into_iter()
            .map(|v| v.trim().to_lowercase())
            .filter(|v| !v.is_empty())
            .collect();

        if let Some(group) = self.groups.iter_mut().find(|g| g.concept == concept) {
            for variant in incoming {
                if !group.variants.contains(&variant) {
                    group.variants.push(variant);
                }
            }
        } else if !incoming.is_empty() {
            self.groups.push(SynonymGroup {
                concept,
                variants: incoming,
            });
        }
    }

    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    /// True when some group has a variant contained in `a` and a variant
    /// contained in `b`. Both arguments must already be lowercased.
    fn share_group(&self, a: &str, b: &str) -> bool {
        self.groups.iter().any(|group| {
            group.variants.iter().any(|v| a.contains(v.as_str()))
                && group.variants.iter().any(|v| b.contains(v.as_str()))
        })
    }
}

impl Default for SynonymTable {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Decides whether two free-text terms name the same need or offer
#[derive(Debug, Clone, Default)]
pub struct TermNormalizer {
    synonyms: SynonymTable,
}

impl TermNormalizer {
    pub fn new(synonyms: SynonymTable) -> Self {
        Self { synonyms }
    }

    /// Two-stage fuzzy equivalence test
    ///
    /// Stage 1: after stripping non-alphanumerics and lowercasing, one
    /// term contains the other (catches pluralization and prefixes).
    /// Stage 2: both terms contain a variant from the same synonym group
    /// (catches unrelated phrasings of common concepts). Stage 1
    /// short-circuits; terms that strip down to nothing never match.
    pub fn is_fuzzy_match(&self, a: &str, b: &str) -> bool {
        let stripped_a = strip_non_alphanumeric(a);
        let stripped_b = strip_non_alphanumeric(b);

        if !stripped_a.is_empty()
            && !stripped_b.is_empty()
            && (stripped_a.contains(&stripped_b) || stripped_b.contains(&stripped_a))
        {
            return true;
        }

        self.synonyms
            .share_group(&a.to_lowercase(), &b.to_lowercase())
    }

    /// Exact-normalized equality, falling back to fuzzy equivalence
    ///
    /// Empty or whitespace-only terms never match anything.
    pub fn terms_match(&self, a: &str, b: &str) -> bool {
        let norm_a = normalize(a);
        let norm_b = normalize(b);

        if norm_a.is_empty() || norm_b.is_empty() {
            return false;
        }

        norm_a == norm_b || self.is_fuzzy_match(&norm_a, &norm_b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_trims_and_lowercases() {
        assert_eq!(normalize("  Design Feedback  "), "design feedback");
        assert_eq!(normalize("CODE"), "code");
    }

    #[test]
    fn test_substring_containment_matches() {
        let normalizer = TermNormalizer::default();
        assert!(normalizer.is_fuzzy_match("mentorship", "mentor"));
        assert!(normalizer.is_fuzzy_match("mentor", "mentorship"));
    }

    #[test]
    fn test_punctuation_stripped_before_containment() {
        let normalizer = TermNormalizer::default();
        assert!(normalizer.is_fuzzy_match("co-founder", "cofounder"));
        assert!(normalizer.is_fuzzy_match("Co-Founder wanted", "cofounder"));
    }

    #[test]
    fn test_synonym_group_membership() {
        let normalizer = TermNormalizer::default();
        // No substring relation; only the design group links these
        assert!(normalizer.is_fuzzy_match("ux", "design"));
        assert!(normalizer.is_fuzzy_match("developer", "coding help"));
        assert!(normalizer.is_fuzzy_match("investment advice", "money"));
    }

    #[test]
    fn test_unrelated_terms_do_not_match() {
        let normalizer = TermNormalizer::default();
        assert!(!normalizer.is_fuzzy_match("legal", "design"));
        assert!(!normalizer.terms_match("marketing", "accounting"));
    }

    #[test]
    fn test_empty_terms_never_match() {
        let normalizer = TermNormalizer::default();
        assert!(!normalizer.terms_match("", "design"));
        assert!(!normalizer.terms_match("   ", "design"));
        assert!(!normalizer.terms_match("!!!", "???"));
    }

    #[test]
    fn test_exact_match_is_case_and_whitespace_insensitive() {
        let normalizer = TermNormalizer::default();
        assert!(normalizer.terms_match("  Design  ", "design"));
    }

    #[test]
    fn test_extended_table_picks_up_new_group() {
        let mut table = SynonymTable::builtin();
        table.extend("legal", vec!["legal".to_string(), "lawyer".to_string()]);

        let normalizer = TermNormalizer::new(table);
        assert!(normalizer.is_fuzzy_match("lawyer", "legal advice"));
    }

    #[test]
    fn test_extend_merges_into_existing_group() {
        let mut table = SynonymTable::builtin();
        let before = table.group_count();
        table.extend("design", vec!["branding".to_string()]);

        assert_eq!(table.group_count(), before);
        let normalizer = TermNormalizer::new(table);
        assert!(normalizer.is_fuzzy_match("branding", "ux"));
    }

    #[test]
    fn test_empty_table_disables_synonyms() {
        let normalizer = TermNormalizer::new(SynonymTable::empty());
        assert!(!normalizer.is_fuzzy_match("ux", "design"));
        // Containment still works without a table
        assert!(normalizer.is_fuzzy_match("designer", "design"));
    }
}
