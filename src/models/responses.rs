use crate::core::shaping;
use crate::models::domain::{Match, MatchTier};
use serde::{Deserialize, Serialize};

/// One ranked match as rendered on a card list
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchSummary {
    #[serde(rename = "profileId")]
    pub profile_id: String,
    pub name: String,
    pub score: usize,
    pub tier: MatchTier,
    #[serde(rename = "matchedTerms")]
    pub matched_terms: Vec<String>,
    pub description: String,
    pub popularity: u64,
}

impl From<&Match<'_>> for MatchSummary {
    fn from(m: &Match<'_>) -> Self {
        Self {
            profile_id: m.profile.id.clone(),
            name: m.profile.name.clone(),
            score: m.score,
            tier: m.tier,
            matched_terms: m.matched_terms.clone(),
            description: shaping::describe(m),
            popularity: m.profile.popularity,
        }
    }
}

/// Response for the find/reverse match endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FindMatchesResponse {
    pub matches: Vec<MatchSummary>,
    #[serde(rename = "totalCandidates")]
    pub total_candidates: usize,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
