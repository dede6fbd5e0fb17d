// Core algorithm exports
pub mod normalize;
pub mod ranker;
pub mod scoring;

pub use normalize::{normalize_mentee, validate_mentor, AffinityError, MentorMatching, NormalizedMentee};
pub use ranker::{ExcludedMentor, RankOutcome, Ranker, DEFAULT_VISIBILITY_THRESHOLD};
pub use scoring::score_affinity;
