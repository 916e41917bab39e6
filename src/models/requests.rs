use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to find matches for a profile
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct FindMatchesRequest {
    #[validate(length(min = 1))]
    #[serde(alias = "profile_id", rename = "profileId")]
    pub profile_id: String,
    #[serde(default)]
    pub limit: Option<u16>,
    #[serde(default, alias = "min_score", rename = "minScore")]
    pub min_score: Option<usize>,
}
