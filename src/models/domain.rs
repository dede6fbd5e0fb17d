use serde::{Deserialize, Serialize};

/// Seniority tiers, ordered from least to most senior.
///
/// The ordering is load-bearing: the experience variable scores the
/// mentor-minus-mentee tier distance, not mere inequality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ExperienceLevel {
    Junior,
    MidLevel,
    Senior,
    Lead,
    CLevel,
}

impl ExperienceLevel {
    /// Ordinal tier (1-5) used for gap math.
    pub fn tier(&self) -> u8 {
        match self {
            ExperienceLevel::Junior => 1,
            ExperienceLevel::MidLevel => 2,
            ExperienceLevel::Senior => 3,
            ExperienceLevel::Lead => 4,
            ExperienceLevel::CLevel => 5,
        }
    }
}

/// Communication styles, equality-only comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CommunicationStyle {
    Direct,
    Formal,
    Casual,
    Analytical,
}

/// Timezone preference with an asymmetric partial-compatibility table:
/// `Global` is a universal wildcard, `Similar` means within roughly 3 hours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimezonePreference {
    Local,
    Global,
    Similar,
}

/// Mentor profile as supplied by the upstream directory
///
/// Matching fields are mandatory on the supply side, but the upstream feed
/// may still hand us incomplete records, so they deserialize as optional and
/// are checked before scoring. A mentor missing any of them is malformed and
/// gets excluded from rankings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MentorProfile {
    #[serde(rename = "mentorId")]
    pub mentor_id: String,
    pub name: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub reviews: u32,
    #[serde(rename = "isActive", default = "default_true")]
    pub is_active: bool,
    #[serde(default)]
    pub expertise: Option<Vec<String>>,
    #[serde(rename = "experienceLevel", default)]
    pub experience_level: Option<ExperienceLevel>,
    #[serde(rename = "communicationStyle", default)]
    pub communication_style: Option<CommunicationStyle>,
    #[serde(rename = "timezonePreference", default)]
    pub timezone_preference: Option<TimezonePreference>,
    #[serde(rename = "weeklyAvailabilityHours", default)]
    pub weekly_availability_hours: Option<f64>,
    #[serde(default)]
    pub motivations: Option<Vec<String>>,
    #[serde(rename = "joinedAt", default)]
    pub joined_at: Option<chrono::DateTime<chrono::Utc>>,
}

fn default_true() -> bool { true }

/// Mentee profile
///
/// Every matching field is optional: the demand side fills in its profile
/// incrementally, and absent fields default conservatively during
/// normalization instead of being rejected.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenteeProfile {
    #[serde(rename = "menteeId")]
    pub mentee_id: String,
    pub name: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub pronouns: Option<String>,
    /// Learning goals; doubles as the expertise set for overlap matching.
    #[serde(alias = "expertise", default)]
    pub goals: Vec<String>,
    #[serde(rename = "experienceLevel", default)]
    pub experience_level: Option<ExperienceLevel>,
    #[serde(rename = "communicationStyle", default)]
    pub communication_style: Option<CommunicationStyle>,
    #[serde(rename = "timezonePreference", default)]
    pub timezone_preference: Option<TimezonePreference>,
    #[serde(rename = "weeklyAvailabilityHours", default)]
    pub weekly_availability_hours: Option<f64>,
    #[serde(default)]
    pub motivations: Vec<String>,
}

/// Display label attached to a per-variable score for UI presentation.
/// Labels never drive branching anywhere else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchType {
    Exact,
    Partial,
    Null,
}

/// Result of scoring a single variable for one mentee/mentor pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariableScore {
    pub score: u8,
    #[serde(rename = "matchType")]
    pub match_type: MatchType,
}

/// Per-variable breakdown of an affinity computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AffinityBreakdown {
    pub expertise: VariableScore,
    #[serde(rename = "experienceLevel")]
    pub experience_level: VariableScore,
    #[serde(rename = "communicationStyle")]
    pub communication_style: VariableScore,
    #[serde(rename = "weeklyAvailability")]
    pub weekly_availability: VariableScore,
    pub timezone: VariableScore,
    pub motivations: VariableScore,
}

impl AffinityBreakdown {
    /// Weighted total across all six variables.
    pub fn weighted_total(&self, weights: &AffinityWeights) -> u32 {
        u32::from(self.expertise.score) * weights.expertise
            + u32::from(self.experience_level.score) * weights.experience_level
            + u32::from(self.communication_style.score) * weights.communication_style
            + u32::from(self.weekly_availability.score) * weights.weekly_availability
            + u32::from(self.timezone.score) * weights.timezone
            + u32::from(self.motivations.score) * weights.motivations
    }
}

/// Scored pair: the weighted affinity total, its percentage of the
/// theoretical maximum, and the per-variable breakdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AffinityResult {
    #[serde(rename = "mentorId")]
    pub mentor_id: String,
    #[serde(rename = "mentorName")]
    pub mentor_name: String,
    #[serde(rename = "totalWeightedScore")]
    pub total_weighted_score: u32,
    pub percentage: f64,
    pub breakdown: AffinityBreakdown,
}

/// Highest score a single variable can reach.
pub const MAX_SCORE_PER_VARIABLE: u32 = 10;

/// Per-variable weights; the defaults encode product priority and are
/// overridable through configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AffinityWeights {
    pub expertise: u32,
    pub experience_level: u32,
    pub communication_style: u32,
    pub weekly_availability: u32,
    pub timezone: u32,
    pub motivations: u32,
}

impl AffinityWeights {
    pub fn sum(&self) -> u32 {
        self.expertise
            + self.experience_level
            + self.communication_style
            + self.weekly_availability
            + self.timezone
            + self.motivations
    }

    /// Theoretical maximum weighted total (every variable scoring a perfect
    /// 10). Derived from the table so weight changes stay consistent.
    pub fn max_total(&self) -> u32 {
        MAX_SCORE_PER_VARIABLE * self.sum()
    }
}

impl Default for AffinityWeights {
    fn default() -> Self {
        Self {
            expertise: 10,
            experience_level: 8,
            weekly_availability: 7,
            communication_style: 6,
            timezone: 5,
            motivations: 4,
        }
    }
}
