use crate::core::normalize::TermNormalizer;

/// Collect the candidate terms that overlap the caller's terms
///
/// Walks the candidate's term list in order and keeps every term for
/// which at least one caller term matches exactly or fuzzily. Each
/// candidate term appears at most once no matter how many caller terms
/// it matches; the returned order is the candidate's original order.
#[inline]
pub fn overlap_terms(
    caller_terms: &[String],
    candidate_terms: &[String],
    normalizer: &TermNormalizer,
) -> Vec<String> {
    candidate_terms
        .iter()
        .filter(|candidate| {
            caller_terms
                .iter()
                .any(|caller| normalizer.terms_match(caller, candidate))
        })
        .cloned()
        .collect()
}
