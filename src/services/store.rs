use crate::models::Profile;
use std::collections::HashSet;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur when loading or querying the profile store
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to read profile fixture: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse profile fixture: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("duplicate profile id: {0}")]
    DuplicateId(String),

    #[error("profile not found: {0}")]
    NotFound(String),
}

/// In-memory profile repository
///
/// Profiles are loaded wholesale from a JSON export of the platform and
/// handed to the engine on every query. Matches are recomputed fresh each
/// time, so the store never caches results or tracks invalidation.
#[derive(Debug, Clone)]
pub struct ProfileStore {
    profiles: Vec<Profile>,
}

impl ProfileStore {
    /// Load a store from a JSON array of profiles
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)?;
        let profiles: Vec<Profile> = serde_json::from_str(&raw)?;

        let store = Self::from_profiles(profiles)?;
        tracing::info!(
            "Loaded {} profiles from {}",
            store.len(),
            path.display()
        );
        Ok(store)
    }

    /// Build a store directly from profiles, rejecting duplicate ids
    pub fn from_profiles(profiles: Vec<Profile>) -> Result<Self, StoreError> {
        let mut seen = HashSet::new();
        for profile in &profiles {
            if !seen.insert(profile.id.as_str()) {
                return Err(StoreError::DuplicateId(profile.id.clone()));
            }
        }

        Ok(Self { profiles })
    }

    pub fn get(&self, id: &str) -> Result<&Profile, StoreError> {
        self.profiles
            .iter()
            .find(|p| p.id == id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }

    /// Every profile except the caller's own; a profile never matches itself
    pub fn candidates_for(&self, id: &str) -> Vec<Profile> {
        self.profiles
            .iter()
            .filter(|p| p.id != id)
            .cloned()
            .collect()
    }

    pub fn all(&self) -> &[Profile] {
        &self.profiles
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}
