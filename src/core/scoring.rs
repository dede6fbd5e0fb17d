use crate::core::normalize::{normalize_mentee, validate_mentor, AffinityError, MentorMatching, NormalizedMentee};
use crate::models::{
    AffinityBreakdown, AffinityResult, AffinityWeights, MatchType, MenteeProfile, MentorProfile,
    TimezonePreference, VariableScore,
};

/// Score awarded for a full match on a variable.
pub const SCORE_EXACT: u8 = 10;
/// Partial score for a near-ideal seniority gap and the Global wildcard.
pub const SCORE_STRONG_PARTIAL: u8 = 7;
/// Partial score for single-item overlaps and half-covered availability.
pub const SCORE_PARTIAL: u8 = 5;
/// Floor applied to every "no match" outcome. Never 0, so one empty
/// variable cannot zero out a total.
pub const SCORE_FLOOR: u8 = 1;

const EXACT: VariableScore = VariableScore { score: SCORE_EXACT, match_type: MatchType::Exact };
const NULL: VariableScore = VariableScore { score: SCORE_FLOOR, match_type: MatchType::Null };

const fn partial(score: u8) -> VariableScore {
    VariableScore { score, match_type: MatchType::Partial }
}

/// Compute the weighted affinity between one mentee and one mentor
///
/// Pure and synchronous: no caching, no mutation of either profile.
/// Scoring is total once the mentee is normalized and the mentor record is
/// proven complete; an incomplete mentor is the only error path.
pub fn score_affinity(
    mentee: &MenteeProfile,
    mentor: &MentorProfile,
    weights: &AffinityWeights,
) -> Result<AffinityResult, AffinityError> {
    let needs = normalize_mentee(mentee);
    let offer = validate_mentor(mentor)?;

    let breakdown = AffinityBreakdown {
        expertise: score_expertise(&needs, &offer),
        experience_level: score_experience_gap(&needs, &offer),
        communication_style: score_communication_style(&needs, &offer),
        weekly_availability: score_availability(&needs, &offer),
        timezone: score_timezone(&needs, &offer),
        motivations: score_motivations(&needs, &offer),
    };

    let total_weighted_score = breakdown.weighted_total(weights);
    let percentage = f64::from(total_weighted_score) / f64::from(weights.max_total()) * 100.0;

    Ok(AffinityResult {
        mentor_id: mentor.mentor_id.clone(),
        mentor_name: mentor.name.clone(),
        total_weighted_score,
        percentage,
        breakdown,
    })
}

/// Goals/expertise overlap: two or more common topics is a full match,
/// exactly one earns partial credit. Case-sensitive exact string equality.
pub fn score_expertise(needs: &NormalizedMentee, offer: &MentorMatching) -> VariableScore {
    overlap_score(common_items(needs.goals, offer.expertise))
}

/// Seniority gap: mentorship value tracks seniority distance, so a mentor
/// two or more tiers above is ideal, one tier above is good, and the same
/// tier or below scores the floor.
pub fn score_experience_gap(needs: &NormalizedMentee, offer: &MentorMatching) -> VariableScore {
    let gap = i16::from(offer.experience_level.tier()) - i16::from(needs.experience_level.tier());

    if gap >= 2 {
        EXACT
    } else if gap == 1 {
        partial(SCORE_STRONG_PARTIAL)
    } else {
        NULL
    }
}

/// Communication style is binary: no partial credit for a mismatch, and an
/// unspecified mentee style never matches.
pub fn score_communication_style(needs: &NormalizedMentee, offer: &MentorMatching) -> VariableScore {
    match needs.communication_style {
        Some(style) if style == offer.communication_style => EXACT,
        _ => NULL,
    }
}

/// Weekly availability: the mentor covering the mentee's asked-for hours is
/// a full match; covering at least half (inclusive boundary) is partial.
pub fn score_availability(needs: &NormalizedMentee, offer: &MentorMatching) -> VariableScore {
    let required = needs.weekly_availability_hours;
    let offered = offer.weekly_availability_hours;

    if offered >= required {
        EXACT
    } else if offered >= required * 0.5 {
        partial(SCORE_PARTIAL)
    } else {
        NULL
    }
}

/// Timezone compatibility table: equal preferences match fully, `Global` on
/// either side is a wildcard, and the Local/Similar cross pair earns partial
/// credit in both directions.
pub fn score_timezone(needs: &NormalizedMentee, offer: &MentorMatching) -> VariableScore {
    use TimezonePreference::{Global, Local, Similar};

    match (needs.timezone_preference, offer.timezone_preference) {
        (Some(mine), theirs) if mine == theirs => EXACT,
        (Some(Global), _) | (_, Global) => partial(SCORE_STRONG_PARTIAL),
        (Some(Similar), Local) | (Some(Local), Similar) => partial(SCORE_PARTIAL),
        _ => NULL,
    }
}

/// Motivations overlap: same rule as expertise, over the motivation sets.
pub fn score_motivations(needs: &NormalizedMentee, offer: &MentorMatching) -> VariableScore {
    overlap_score(common_items(needs.motivations, offer.motivations))
}

#[inline]
fn common_items(mine: &[String], theirs: &[String]) -> usize {
    mine.iter().filter(|item| theirs.contains(item)).count()
}

#[inline]
fn overlap_score(common: usize) -> VariableScore {
    match common {
        0 => NULL,
        1 => partial(SCORE_PARTIAL),
        _ => EXACT,
    }
}
