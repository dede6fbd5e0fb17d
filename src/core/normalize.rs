use thiserror::Error;

use crate::models::{
    CommunicationStyle, ExperienceLevel, MenteeProfile, MentorProfile, TimezonePreference,
};

/// Errors raised by the affinity engine
///
/// Mentee-side gaps are never errors (they default during normalization);
/// the supply side must be complete, so an incomplete mentor record is the
/// single failure mode. It is fatal for that pair only — rankings exclude
/// the mentor and keep going.
#[derive(Debug, Error)]
pub enum AffinityError {
    #[error("mentor {mentor_id} is missing required field `{field}`")]
    MalformedProfile {
        mentor_id: String,
        field: &'static str,
    },
}

/// Mentee matching fields after defaulting, ready for total scoring
/// functions (no null-checks past this point except the two explicit
/// "unspecified" preferences).
///
/// Conservative defaults: empty goal/motivation sets, lowest seniority
/// tier, zero required hours. Style and timezone keep an explicit
/// unspecified state because any concrete default would invent equality
/// matches; unspecified never earns equality credit, though the mentor-side
/// `Global` wildcard still applies for timezone.
#[derive(Debug, Clone, Copy)]
pub struct NormalizedMentee<'a> {
    pub goals: &'a [String],
    pub experience_level: ExperienceLevel,
    pub communication_style: Option<CommunicationStyle>,
    pub timezone_preference: Option<TimezonePreference>,
    pub weekly_availability_hours: f64,
    pub motivations: &'a [String],
}

/// Apply mentee-side defaulting as an explicit normalization step.
pub fn normalize_mentee(mentee: &MenteeProfile) -> NormalizedMentee<'_> {
    NormalizedMentee {
        goals: &mentee.goals,
        experience_level: mentee.experience_level.unwrap_or(ExperienceLevel::Junior),
        communication_style: mentee.communication_style,
        timezone_preference: mentee.timezone_preference,
        weekly_availability_hours: mentee.weekly_availability_hours.unwrap_or(0.0),
        motivations: &mentee.motivations,
    }
}

/// Mentor matching fields proven complete, borrowed from the profile.
#[derive(Debug, Clone, Copy)]
pub struct MentorMatching<'a> {
    pub expertise: &'a [String],
    pub experience_level: ExperienceLevel,
    pub communication_style: CommunicationStyle,
    pub timezone_preference: TimezonePreference,
    pub weekly_availability_hours: f64,
    pub motivations: &'a [String],
}

/// Check a mentor record for completeness before scoring.
///
/// Field names in the error use the wire spelling so operators can match
/// them against the upstream feed.
pub fn validate_mentor(mentor: &MentorProfile) -> Result<MentorMatching<'_>, AffinityError> {
    let missing = |field: &'static str| AffinityError::MalformedProfile {
        mentor_id: mentor.mentor_id.clone(),
        field,
    };

    Ok(MentorMatching {
        expertise: mentor.expertise.as_deref().ok_or_else(|| missing("expertise"))?,
        experience_level: mentor
            .experience_level
            .ok_or_else(|| missing("experienceLevel"))?,
        communication_style: mentor
            .communication_style
            .ok_or_else(|| missing("communicationStyle"))?,
        timezone_preference: mentor
            .timezone_preference
            .ok_or_else(|| missing("timezonePreference"))?,
        weekly_availability_hours: mentor
            .weekly_availability_hours
            .ok_or_else(|| missing("weeklyAvailabilityHours"))?,
        motivations: mentor
            .motivations
            .as_deref()
            .ok_or_else(|| missing("motivations"))?,
    })
}
