use crate::core::normalize::AffinityError;
use crate::core::scoring::score_affinity;
use crate::models::{AffinityResult, AffinityWeights, MenteeProfile, MentorProfile};

/// Minimum percentage a mentor must reach to surface in ranked results.
pub const DEFAULT_VISIBILITY_THRESHOLD: f64 = 60.0;

/// Outcome of ranking a mentor collection for one mentee
#[derive(Debug)]
pub struct RankOutcome {
    /// Retained results, sorted descending by weighted total. Ties keep the
    /// input relative order.
    pub results: Vec<AffinityResult>,
    /// Malformed mentors dropped from the ranking, for operator telemetry.
    pub excluded: Vec<ExcludedMentor>,
    pub total_candidates: usize,
}

/// A mentor excluded from a ranking, with the reason it was dropped.
#[derive(Debug)]
pub struct ExcludedMentor {
    pub mentor_id: String,
    pub reason: AffinityError,
}

/// Ranking orchestrator: scores a mentor collection against one mentee and
/// applies the visibility threshold
///
/// # Pipeline stages
/// 1. Skip inactive mentors
/// 2. Score each pair (malformed mentors are excluded and reported,
///    never failing the whole ranking)
/// 3. Visibility threshold filter
/// 4. Stable descending sort by weighted total
#[derive(Debug, Clone)]
pub struct Ranker {
    weights: AffinityWeights,
    visibility_threshold: f64,
}

impl Ranker {
    pub fn new(weights: AffinityWeights, visibility_threshold: f64) -> Self {
        Self {
            weights,
            visibility_threshold,
        }
    }

    pub fn with_defaults() -> Self {
        Self {
            weights: AffinityWeights::default(),
            visibility_threshold: DEFAULT_VISIBILITY_THRESHOLD,
        }
    }

    pub fn weights(&self) -> &AffinityWeights {
        &self.weights
    }

    pub fn visibility_threshold(&self) -> f64 {
        self.visibility_threshold
    }

    /// Rank candidates using the configured visibility threshold.
    pub fn rank_candidates(&self, mentee: &MenteeProfile, mentors: &[MentorProfile]) -> RankOutcome {
        self.rank_with_threshold(mentee, mentors, self.visibility_threshold)
    }

    /// Rank candidates against an explicit percentage threshold.
    ///
    /// An empty result list is a valid outcome: it means no mentor is
    /// compatible enough to surface.
    pub fn rank_with_threshold(
        &self,
        mentee: &MenteeProfile,
        mentors: &[MentorProfile],
        threshold: f64,
    ) -> RankOutcome {
        let total_candidates = mentors.len();
        let mut excluded = Vec::new();

        let mut results: Vec<AffinityResult> = mentors
            .iter()
            .filter(|mentor| mentor.is_active)
            .filter_map(|mentor| match score_affinity(mentee, mentor, &self.weights) {
                Ok(result) => Some(result),
                Err(reason) => {
                    excluded.push(ExcludedMentor {
                        mentor_id: mentor.mentor_id.clone(),
                        reason,
                    });
                    None
                }
            })
            .filter(|result| result.percentage >= threshold)
            .collect();

        // Integer totals keep the comparison exact; sort_by is stable, so
        // tied mentors stay in input order.
        results.sort_by(|a, b| b.total_weighted_score.cmp(&a.total_weighted_score));

        RankOutcome {
            results,
            excluded,
            total_candidates,
        }
    }
}

impl Default for Ranker {
    fn default() -> Self {
        Self::with_defaults()
    }
}
