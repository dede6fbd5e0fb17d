//! Mentora Algo - Affinity scoring service for the Mentora mentorship marketplace
//!
//! This library provides the weighted affinity engine used to match mentees
//! with mentors: six scored variables, a derived maximum, and a ranked,
//! threshold-filtered candidate list. The engine is pure and synchronous;
//! the surrounding modules supply the HTTP surface, configuration, and the
//! in-memory profile directory.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use core::{
    normalize_mentee, score_affinity, validate_mentor, AffinityError, Ranker,
    DEFAULT_VISIBILITY_THRESHOLD,
};
pub use models::{
    AffinityBreakdown, AffinityResult, AffinityWeights, CommunicationStyle, ExperienceLevel,
    MatchType, MenteeProfile, MentorProfile, TimezonePreference, VariableScore,
};
pub use services::{DirectoryError, DirectoryStore};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        // Verify that the library exports work correctly
        let weights = AffinityWeights::default();
        assert_eq!(weights.max_total(), 400);
        assert_eq!(DEFAULT_VISIBILITY_THRESHOLD, 60.0);
    }
}
