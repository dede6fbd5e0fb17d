// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    AffinityBreakdown, AffinityResult, AffinityWeights, CommunicationStyle, ExperienceLevel,
    MatchType, MenteeProfile, MentorProfile, TimezonePreference, VariableScore,
    MAX_SCORE_PER_VARIABLE,
};
pub use requests::{RankCandidatesRequest, ScoreAffinityRequest};
pub use responses::{ErrorResponse, HealthResponse, MentorListResponse, RankCandidatesResponse};
