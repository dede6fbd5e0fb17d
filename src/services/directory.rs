use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::models::{MenteeProfile, MentorProfile};

/// Errors that can occur while loading or querying the profile directory
#[derive(Debug, Error)]
pub enum DirectoryError {
    #[error("failed to read seed file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("seed file {path} is not valid profile JSON: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("not found: {0}")]
    NotFound(String),
}

/// Shape of the JSON seed file.
#[derive(Debug, Deserialize)]
struct SeedFile {
    #[serde(default)]
    mentees: Vec<MenteeProfile>,
    #[serde(default)]
    mentors: Vec<MentorProfile>,
}

/// In-memory mentee/mentor directory
///
/// Stands in for the marketplace's upstream profile store. Loaded once at
/// startup and read-only afterwards, so handlers can share it without
/// coordination. Mentor order from the seed file is preserved: ranking ties
/// resolve by that order.
#[derive(Debug)]
pub struct DirectoryStore {
    mentees: HashMap<String, MenteeProfile>,
    mentors: Vec<MentorProfile>,
    mentor_index: HashMap<String, usize>,
}

impl DirectoryStore {
    /// Load the directory from a JSON seed file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, DirectoryError> {
        let path_str = path.as_ref().display().to_string();

        let raw = std::fs::read_to_string(&path).map_err(|source| DirectoryError::Io {
            path: path_str.clone(),
            source,
        })?;

        let seed: SeedFile = serde_json::from_str(&raw).map_err(|source| DirectoryError::Parse {
            path: path_str.clone(),
            source,
        })?;

        tracing::info!(
            "Loaded profile directory from {}: {} mentees, {} mentors",
            path_str,
            seed.mentees.len(),
            seed.mentors.len()
        );

        Ok(Self::from_records(seed.mentees, seed.mentors))
    }

    /// Build a directory from already-deserialized records.
    pub fn from_records(mentees: Vec<MenteeProfile>, mentors: Vec<MentorProfile>) -> Self {
        let mentees = mentees
            .into_iter()
            .map(|m| (m.mentee_id.clone(), m))
            .collect();

        let mentor_index = mentors
            .iter()
            .enumerate()
            .map(|(i, m)| (m.mentor_id.clone(), i))
            .collect();

        Self {
            mentees,
            mentors,
            mentor_index,
        }
    }

    pub fn mentee(&self, mentee_id: &str) -> Result<&MenteeProfile, DirectoryError> {
        self.mentees
            .get(mentee_id)
            .ok_or_else(|| DirectoryError::NotFound(format!("mentee {}", mentee_id)))
    }

    pub fn mentor(&self, mentor_id: &str) -> Result<&MentorProfile, DirectoryError> {
        self.mentor_index
            .get(mentor_id)
            .map(|&i| &self.mentors[i])
            .ok_or_else(|| DirectoryError::NotFound(format!("mentor {}", mentor_id)))
    }

    /// All mentors in seed-file order.
    pub fn mentors(&self) -> &[MentorProfile] {
        &self.mentors
    }

    pub fn mentee_count(&self) -> usize {
        self.mentees.len()
    }

    pub fn mentor_count(&self) -> usize {
        self.mentors.len()
    }
}
