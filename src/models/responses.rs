use serde::{Deserialize, Serialize};
use crate::models::domain::{AffinityResult, MentorProfile};

/// Response for the rank candidates endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankCandidatesResponse {
    pub results: Vec<AffinityResult>,
    #[serde(rename = "totalCandidates")]
    pub total_candidates: usize,
    /// Mentors dropped because their record was malformed. Operator-facing;
    /// end users never see an error for these.
    #[serde(rename = "excludedMentors")]
    pub excluded_mentors: usize,
}

/// Response for the mentor directory listing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MentorListResponse {
    pub mentors: Vec<MentorProfile>,
    pub count: usize,
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
