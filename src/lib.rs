//! Buffalo Match - peer matching service for the Buffalo Projects platform
//!
//! This library provides the term-overlap matching engine used to connect
//! builders: profiles declare asks (what they need) and gives (what they
//! offer), and the engine ranks candidates by exact and fuzzy overlap in
//! both directions.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{MatchEngine, MatchResult, SynonymTable, TermNormalizer};
pub use crate::models::{
    FindMatchesRequest, FindMatchesResponse, Match, MatchSummary, MatchTier, Profile,
};
pub use crate::services::{ProfileStore, StoreError};
