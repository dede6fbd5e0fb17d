use actix_web::{web, HttpResponse, Responder};
use validator::Validate;

use crate::core::Ranker;
use crate::models::{
    ErrorResponse, HealthResponse, MentorListResponse, RankCandidatesRequest,
    RankCandidatesResponse, ScoreAffinityRequest,
};
use crate::services::{DirectoryError, DirectoryStore};
use std::sync::Arc;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub directory: Arc<DirectoryStore>,
    pub ranker: Ranker,
    pub default_limit: u16,
    pub max_limit: u16,
}

/// Configure all affinity-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check))
        .route("/affinity/rank", web::post().to(rank_candidates))
        .route("/affinity/score", web::post().to(score_pair))
        .route("/mentors", web::get().to(list_mentors));
}

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Rank candidates endpoint
///
/// POST /api/v1/affinity/rank
///
/// Request body:
/// ```json
/// {
///   "menteeId": "string",
///   "threshold": 60.0,
///   "limit": 20
/// }
/// ```
async fn rank_candidates(
    state: web::Data<AppState>,
    req: web::Json<RankCandidatesRequest>,
) -> impl Responder {
    // Validate request
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for rank request: {:?}", errors);
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let mentee_id = &req.mentee_id;
    let limit = usize::from(req.limit.unwrap_or(state.default_limit).min(state.max_limit));

    tracing::info!("Ranking candidates for mentee: {}, limit: {}", mentee_id, limit);

    let mentee = match state.directory.mentee(mentee_id) {
        Ok(mentee) => mentee,
        Err(e) => return not_found(e),
    };

    let outcome = match req.threshold {
        Some(threshold) => {
            state
                .ranker
                .rank_with_threshold(mentee, state.directory.mentors(), threshold)
        }
        None => state.ranker.rank_candidates(mentee, state.directory.mentors()),
    };

    // Malformed supply-side records are an operator problem, not a user
    // error: log each one and keep the ranking.
    for excluded in &outcome.excluded {
        tracing::warn!(
            "Excluding mentor {} from ranking: {}",
            excluded.mentor_id,
            excluded.reason
        );
    }

    let excluded_mentors = outcome.excluded.len();
    let mut results = outcome.results;
    results.truncate(limit);

    tracing::debug!(
        "Returning {} of {} candidates for mentee {} ({} excluded)",
        results.len(),
        outcome.total_candidates,
        mentee_id,
        excluded_mentors
    );

    HttpResponse::Ok().json(RankCandidatesResponse {
        results,
        total_candidates: outcome.total_candidates,
        excluded_mentors,
    })
}

/// Single-pair scoring endpoint, used by the detail breakdown view
///
/// POST /api/v1/affinity/score
///
/// Request body:
/// ```json
/// {
///   "menteeId": "string",
///   "mentorId": "string"
/// }
/// ```
async fn score_pair(
    state: web::Data<AppState>,
    req: web::Json<ScoreAffinityRequest>,
) -> impl Responder {
    // Validate request
    if let Err(errors) = req.validate() {
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let mentee = match state.directory.mentee(&req.mentee_id) {
        Ok(mentee) => mentee,
        Err(e) => return not_found(e),
    };

    let mentor = match state.directory.mentor(&req.mentor_id) {
        Ok(mentor) => mentor,
        Err(e) => return not_found(e),
    };

    match crate::core::score_affinity(mentee, mentor, state.ranker.weights()) {
        Ok(result) => HttpResponse::Ok().json(result),
        Err(e) => {
            tracing::warn!("Cannot score pair ({}, {}): {}", req.mentee_id, req.mentor_id, e);
            HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Malformed mentor profile".to_string(),
                message: e.to_string(),
                status_code: 500,
            })
        }
    }
}

/// Mentor directory listing, consumed by the discovery view
///
/// GET /api/v1/mentors
async fn list_mentors(state: web::Data<AppState>) -> impl Responder {
    let mentors = state.directory.mentors().to_vec();
    let count = mentors.len();

    HttpResponse::Ok().json(MentorListResponse { mentors, count })
}

fn not_found(e: DirectoryError) -> HttpResponse {
    HttpResponse::NotFound().json(ErrorResponse {
        error: "Profile not found".to_string(),
        message: e.to_string(),
        status_code: 404,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{test, App};
    use crate::models::{MenteeProfile, MentorProfile};

    fn seeded_state() -> AppState {
        let mentees: Vec<MenteeProfile> = serde_json::from_str(
            r#"[{
                "menteeId": "e1",
                "name": "Sam",
                "goals": ["Data Science", "AI/ML"],
                "communicationStyle": "analytical",
                "timezonePreference": "local",
                "weeklyAvailabilityHours": 4,
                "motivations": ["Leadership", "Innovation"]
            }]"#,
        )
        .unwrap();

        let mentors: Vec<MentorProfile> = serde_json::from_str(
            r#"[
                {
                    "mentorId": "m1",
                    "name": "Ada",
                    "expertise": ["Data Science", "AI/ML"],
                    "experienceLevel": "lead",
                    "communicationStyle": "analytical",
                    "timezonePreference": "local",
                    "weeklyAvailabilityHours": 6,
                    "motivations": ["Leadership", "Innovation"]
                },
                {
                    "mentorId": "m2",
                    "name": "Grace",
                    "expertise": ["Marketing"],
                    "experienceLevel": "junior",
                    "communicationStyle": "casual",
                    "timezonePreference": "similar",
                    "weeklyAvailabilityHours": 1,
                    "motivations": ["Networking"]
                }
            ]"#,
        )
        .unwrap();

        AppState {
            directory: Arc::new(DirectoryStore::from_records(mentees, mentors)),
            ranker: Ranker::with_defaults(),
            default_limit: 20,
            max_limit: 100,
        }
    }

    #[actix_web::test]
    async fn test_health_endpoint() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(seeded_state()))
                .configure(configure),
        )
        .await;

        let req = test::TestRequest::get().uri("/health").to_request();
        let resp: HealthResponse = test::call_and_read_body_json(&app, req).await;

        assert_eq!(resp.status, "healthy");
    }

    #[actix_web::test]
    async fn test_rank_endpoint_filters_and_sorts() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(seeded_state()))
                .configure(configure),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/affinity/rank")
            .set_json(serde_json::json!({"menteeId": "e1"}))
            .to_request();
        let resp: RankCandidatesResponse = test::call_and_read_body_json(&app, req).await;

        assert_eq!(resp.total_candidates, 2);
        assert_eq!(resp.results.len(), 1);
        assert_eq!(resp.results[0].mentor_id, "m1");
    }

    #[actix_web::test]
    async fn test_rank_endpoint_unknown_mentee_is_404() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(seeded_state()))
                .configure(configure),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/affinity/rank")
            .set_json(serde_json::json!({"menteeId": "ghost"}))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), actix_web::http::StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn test_score_endpoint_returns_breakdown() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(seeded_state()))
                .configure(configure),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/affinity/score")
            .set_json(serde_json::json!({"menteeId": "e1", "mentorId": "m2"}))
            .to_request();
        let resp: crate::models::AffinityResult = test::call_and_read_body_json(&app, req).await;

        assert_eq!(resp.mentor_id, "m2");
        assert_eq!(resp.breakdown.expertise.score, 1);
    }

    #[actix_web::test]
    async fn test_mentor_listing() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(seeded_state()))
                .configure(configure),
        )
        .await;

        let req = test::TestRequest::get().uri("/mentors").to_request();
        let resp: MentorListResponse = test::call_and_read_body_json(&app, req).await;

        assert_eq!(resp.count, 2);
        assert_eq!(resp.mentors[0].mentor_id, "m1");
    }
}
