use serde::{Deserialize, Serialize};

/// Project profile with the ask/give terms consumed by the matcher
///
/// This is the narrow shape the engine depends on; the platform's richer
/// workspace documents adapt down to it at the store boundary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    #[serde(rename = "profileId", alias = "id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub asks: Vec<String>,
    #[serde(default)]
    pub gives: Vec<String>,
    #[serde(default, alias = "viewCount")]
    pub popularity: u64,
}

impl Profile {
    /// Helper for construction in tests and fixtures
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            asks: Vec::new(),
            gives: Vec::new(),
            popularity: 0,
        }
    }
}

/// Coarse match-strength bucket derived from the overlap score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchTier {
    Perfect,
    Good,
    Potential,
}

impl MatchTier {
    /// score >= 3 is perfect, exactly 2 is good, everything below is potential
    pub fn from_score(score: usize) -> Self {
        match score {
            s if s >= 3 => MatchTier::Perfect,
            2 => MatchTier::Good,
            _ => MatchTier::Potential,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MatchTier::Perfect => "perfect",
            MatchTier::Good => "good",
            MatchTier::Potential => "potential",
        }
    }
}

/// One computed match
///
/// Borrows the candidate profile; matches live only for the duration of
/// the query that produced them and are never stored.
#[derive(Debug, Clone, Serialize)]
pub struct Match<'a> {
    pub profile: &'a Profile,
    pub score: usize,
    #[serde(rename = "matchedTerms")]
    pub matched_terms: Vec<String>,
    pub tier: MatchTier,
}
