// Core algorithm exports
pub mod matcher;
pub mod normalize;
pub mod scoring;
pub mod shaping;

pub use matcher::{MatchEngine, MatchResult};
pub use normalize::{normalize, SynonymTable, TermNormalizer};
pub use scoring::overlap_terms;
pub use shaping::{
    describe, filter_by_minimum_score, top_matches, DEFAULT_MIN_SCORE, DEFAULT_TOP_COUNT,
};
