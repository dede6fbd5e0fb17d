// Integration tests: profile directory + ranking end-to-end

use mentora_algo::core::Ranker;
use mentora_algo::models::{AffinityWeights, MenteeProfile, MentorProfile};
use mentora_algo::services::DirectoryStore;

fn seed_directory() -> DirectoryStore {
    let mentees: Vec<MenteeProfile> = serde_json::from_str(
        r#"[
            {
                "menteeId": "mentee-maria",
                "name": "Maria Santos",
                "goals": ["Data Science", "AI/ML"],
                "experienceLevel": "junior",
                "communicationStyle": "analytical",
                "timezonePreference": "local",
                "weeklyAvailabilityHours": 4,
                "motivations": ["Leadership", "Innovation"]
            },
            {
                "menteeId": "mentee-priya",
                "name": "Priya Nair"
            }
        ]"#,
    )
    .unwrap();

    let mentors: Vec<MentorProfile> = serde_json::from_str(
        r#"[
            {
                "mentorId": "mentor-saanvi",
                "name": "Saanvi Rao",
                "expertise": ["Data Science", "AI/ML", "Healthcare Analytics"],
                "experienceLevel": "lead",
                "communicationStyle": "analytical",
                "timezonePreference": "similar",
                "weeklyAvailabilityHours": 4,
                "motivations": ["Innovation", "Leadership"]
            },
            {
                "mentorId": "mentor-aisha",
                "name": "Aisha Khan",
                "expertise": ["Product Management", "AI/ML", "Data Science"],
                "experienceLevel": "senior",
                "communicationStyle": "direct",
                "timezonePreference": "global",
                "weeklyAvailabilityHours": 3,
                "motivations": ["Career Growth", "Innovation"]
            },
            {
                "mentorId": "mentor-carmen",
                "name": "Carmen Ortiz",
                "expertise": ["Marketing", "Growth"],
                "experienceLevel": "mid-level",
                "communicationStyle": "casual",
                "timezonePreference": "global",
                "weeklyAvailabilityHours": 6,
                "motivations": ["Networking"]
            },
            {
                "mentorId": "mentor-broken",
                "name": "Missing Fields",
                "expertise": ["Data Science", "AI/ML"]
            },
            {
                "mentorId": "mentor-sofia",
                "name": "Sofia Almeida",
                "isActive": false,
                "expertise": ["Data Science", "AI/ML"],
                "experienceLevel": "c-level",
                "communicationStyle": "analytical",
                "timezonePreference": "local",
                "weeklyAvailabilityHours": 8,
                "motivations": ["Leadership", "Innovation"]
            }
        ]"#,
    )
    .unwrap();

    DirectoryStore::from_records(mentees, mentors)
}

#[test]
fn test_end_to_end_ranking() {
    let directory = seed_directory();
    let ranker = Ranker::with_defaults();
    let mentee = directory.mentee("mentee-maria").unwrap();

    let outcome = ranker.rank_candidates(mentee, directory.mentors());

    // Carmen is below the 60% threshold, the broken record is excluded,
    // Sofia is inactive: Saanvi and Aisha remain.
    assert_eq!(outcome.total_candidates, 5);
    assert_eq!(outcome.results.len(), 2);
    assert_eq!(outcome.results[0].mentor_id, "mentor-saanvi");
    assert_eq!(outcome.results[1].mentor_id, "mentor-aisha");

    for pair in outcome.results.windows(2) {
        assert!(pair[0].percentage >= pair[1].percentage);
    }

    assert_eq!(outcome.excluded.len(), 1);
    assert_eq!(outcome.excluded[0].mentor_id, "mentor-broken");
}

#[test]
fn test_sparse_mentee_still_ranks() {
    // Priya has no matching fields at all; defaulting still produces a
    // valid ranking (possibly empty) instead of an error.
    let directory = seed_directory();
    let ranker = Ranker::with_defaults();
    let mentee = directory.mentee("mentee-priya").unwrap();

    let outcome = ranker.rank_candidates(mentee, directory.mentors());

    for result in &outcome.results {
        assert!(result.percentage >= 60.0);
    }
}

#[test]
fn test_threshold_override_widens_results() {
    let directory = seed_directory();
    let ranker = Ranker::with_defaults();
    let mentee = directory.mentee("mentee-maria").unwrap();

    let strict = ranker.rank_with_threshold(mentee, directory.mentors(), 90.0);
    let lax = ranker.rank_with_threshold(mentee, directory.mentors(), 10.0);

    assert!(strict.results.len() <= lax.results.len());
    // Every active, well-formed mentor clears a 10% bar (the floor is 10%).
    assert_eq!(lax.results.len(), 3);
}

#[test]
fn test_custom_weights_change_the_denominator() {
    let directory = seed_directory();
    let mentee = directory.mentee("mentee-maria").unwrap();

    let mut weights = AffinityWeights::default();
    weights.expertise = 20;
    assert_eq!(weights.max_total(), 500);

    let ranker = Ranker::new(weights, 60.0);
    let outcome = ranker.rank_candidates(mentee, directory.mentors());

    for result in &outcome.results {
        let pct = f64::from(result.total_weighted_score) / 500.0 * 100.0;
        assert!((result.percentage - pct).abs() < f64::EPSILON);
    }
}

#[test]
fn test_results_do_not_mutate_directory() {
    let directory = seed_directory();
    let ranker = Ranker::with_defaults();
    let mentee = directory.mentee("mentee-maria").unwrap();

    let first = ranker.rank_candidates(mentee, directory.mentors());
    let second = ranker.rank_candidates(mentee, directory.mentors());

    assert_eq!(first.results, second.results);
    assert_eq!(directory.mentor_count(), 5);
}
