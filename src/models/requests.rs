use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to rank mentor candidates for a mentee
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RankCandidatesRequest {
    #[validate(length(min = 1))]
    #[serde(alias = "mentee_id", rename = "menteeId")]
    pub mentee_id: String,
    /// Minimum percentage a mentor must reach to appear in results.
    /// Falls back to the configured visibility threshold when absent.
    #[validate(range(min = 0.0, max = 100.0))]
    #[serde(default)]
    pub threshold: Option<f64>,
    #[serde(default)]
    pub limit: Option<u16>,
}

/// Request to score a single mentee/mentor pair
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ScoreAffinityRequest {
    #[validate(length(min = 1))]
    #[serde(alias = "mentee_id", rename = "menteeId")]
    pub mentee_id: String,
    #[validate(length(min = 1))]
    #[serde(alias = "mentor_id", rename = "mentorId")]
    pub mentor_id: String,
}
