// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{Match, MatchTier, Profile};
pub use requests::FindMatchesRequest;
pub use responses::{ErrorResponse, FindMatchesResponse, HealthResponse, MatchSummary};
