// Integration tests for Jobmatch Engine

use actix_web::test as actix_test;
use actix_web::{web, App};
use jobmatch_engine::config::RankingSettings;
use jobmatch_engine::core::Ranker;
use jobmatch_engine::error::handle_json_payload_error;
use jobmatch_engine::models::{JobFilter, JobRecord, RankResponse, ScoreResponse};
use jobmatch_engine::routes::{self, AppState};
use serde_json::json;

fn create_test_job(id: &str, title: &str, lat: f64, lon: f64, skills: &[&str]) -> JobRecord {
    JobRecord {
        id: id.to_string(),
        title: Some(title.to_string()),
        latitude: Some(lat),
        longitude: Some(lon),
        required_skills: skills.iter().map(|s| s.to_string()).collect(),
        ..Default::default()
    }
}

fn create_test_filter(lat: f64, lon: f64) -> JobFilter {
    JobFilter {
        title: Some("Developer".to_string()),
        latitude: Some(lat),
        longitude: Some(lon),
        skills: vec!["Rust".to_string(), "SQL".to_string()],
        ..Default::default()
    }
}

macro_rules! test_app {
    ($ranking:expr) => {
        actix_test::init_service(
            App::new()
                .app_data(web::Data::new(AppState::new($ranking)))
                .app_data(web::JsonConfig::default().error_handler(handle_json_payload_error))
                .configure(routes::configure_routes),
        )
        .await
    };
}

#[test]
fn test_integration_end_to_end_ranking() {
    let ranker = Ranker::new(10);
    let filter = create_test_filter(52.52, 13.405); // Berlin

    let jobs = vec![
        create_test_job("1", "Rust Developer", 52.51, 13.40, &["Rust"]),      // Good match
        create_test_job("2", "Backend Developer", 52.53, 13.41, &["SQL"]),    // Good match
        create_test_job("3", "Developer", 53.55, 9.99, &["Rust", "SQL"]),     // Hamburg
        create_test_job("4", "Chef", 48.13, 11.58, &["Cooking"]),             // Nothing in common
        create_test_job("5", "Frontend Developer", 52.52, 13.40, &[]),        // No requirements
    ];

    let result = ranker.rank_jobs(&filter, &jobs, false, 10);

    assert_eq!(result.total_candidates, 5);
    assert!(result.matches.iter().all(|m| m.id != "4"), "Chef should fall below the minimum score");

    for pair in result.matches.windows(2) {
        assert!(pair[0].score >= pair[1].score, "Matches not sorted by score");
    }

    for m in &result.matches {
        assert!(m.score <= 100, "Score {} is out of range", m.score);
    }
}

#[test]
fn test_flexible_mode_changes_ranking() {
    let ranker = Ranker::default();
    let filter = JobFilter {
        skills: vec!["Rust".to_string()],
        ..Default::default()
    };
    let jobs = vec![
        create_test_job("demanding", "Developer", 52.52, 13.405, &["Rust", "Kubernetes", "Terraform"]),
        create_test_job("open", "Developer", 52.52, 13.405, &[]),
    ];

    let strict = ranker.rank_jobs(&filter, &jobs, false, 10);
    let flexible = ranker.rank_jobs(&filter, &jobs, true, 10);

    // Strict: the demanding job matches the one held skill outright
    assert_eq!(strict.matches[0].id, "demanding");
    // Flexible: only the job without uncovered requirements is a full match
    assert_eq!(flexible.matches[0].id, "open");
    assert_eq!(flexible.matches[1].score, 0);
}

#[actix_web::test]
async fn test_health_endpoint() {
    let app = test_app!(RankingSettings::default());

    let req = actix_test::TestRequest::get().uri("/api/v1/health").to_request();
    let body: serde_json::Value = actix_test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["status"], "healthy");
}

#[actix_web::test]
async fn test_score_job_endpoint() {
    let app = test_app!(RankingSettings::default());

    let req = actix_test::TestRequest::post()
        .uri("/api/v1/score/job")
        .set_json(json!({
            "job": {
                "title": "Backend Engineer",
                "city": "Berlin",
                "requiredSkills": ["Go", "SQL"],
                "salaryMin": 50000,
                "salaryMax": 70000
            },
            "filter": {
                "title": "Backend",
                "city": "Berlin",
                "skills": ["Go", "SQL", "Kubernetes"],
                "salaryRange": { "min": 60000, "max": 80000 }
            },
            "explain": true
        }))
        .to_request();
    let body: ScoreResponse = actix_test::call_and_read_body_json(&app, req).await;

    assert_eq!(body.score, 86);
    assert_eq!(body.matched, 6.0);
    assert_eq!(body.total, 7.0);
    assert_eq!(body.breakdown.map(|b| b.len()), Some(4));
}

#[actix_web::test]
async fn test_score_job_uses_filter_flexible_mode() {
    let app = test_app!(RankingSettings::default());

    let payload = |flexible: Option<bool>| {
        json!({
            "job": { "requiredSkills": ["Go", "Rust", "Python"] },
            "filter": { "skills": ["Go"], "flexibleMode": true },
            "flexible": flexible
        })
    };

    let req = actix_test::TestRequest::post()
        .uri("/api/v1/score/job")
        .set_json(payload(None))
        .to_request();
    let body: ScoreResponse = actix_test::call_and_read_body_json(&app, req).await;
    assert_eq!((body.matched, body.total), (0.0, 1.0));
    assert!(body.breakdown.is_none());

    let req = actix_test::TestRequest::post()
        .uri("/api/v1/score/job")
        .set_json(payload(Some(false)))
        .to_request();
    let body: ScoreResponse = actix_test::call_and_read_body_json(&app, req).await;
    assert_eq!((body.matched, body.total), (1.0, 1.0));
}

#[actix_web::test]
async fn test_score_candidate_endpoint() {
    let app = test_app!(RankingSettings::default());

    let req = actix_test::TestRequest::post()
        .uri("/api/v1/score/candidate")
        .set_json(json!({
            "candidate": { "id": "c-1", "skills": ["Rust"], "gender": "female" },
            "filter": { "skills": ["Rust", "Go"], "genders": ["female"] }
        }))
        .to_request();
    let body: ScoreResponse = actix_test::call_and_read_body_json(&app, req).await;

    assert_eq!(body.matched, 2.0);
    assert_eq!(body.total, 3.0);
    assert_eq!(body.score, 67);
}

#[actix_web::test]
async fn test_rank_candidates_endpoint_applies_limit() {
    let app = test_app!(RankingSettings::default());

    let candidates: Vec<_> = (0..10)
        .map(|i| json!({ "id": format!("c-{}", i), "skills": if i % 2 == 0 { vec!["Rust"] } else { vec![] } }))
        .collect();

    let req = actix_test::TestRequest::post()
        .uri("/api/v1/rank/candidates")
        .set_json(json!({
            "filter": { "skills": ["Rust"] },
            "candidates": candidates,
            "limit": 3
        }))
        .to_request();
    let body: RankResponse = actix_test::call_and_read_body_json(&app, req).await;

    assert_eq!(body.total_results, 10);
    assert_eq!(body.matches.len(), 3);
    assert!(body.matches.iter().all(|m| m.score == 100));
}

#[actix_web::test]
async fn test_rank_jobs_rejects_empty_batch() {
    let app = test_app!(RankingSettings::default());

    let req = actix_test::TestRequest::post()
        .uri("/api/v1/rank/jobs")
        .set_json(json!({ "filter": {}, "jobs": [] }))
        .to_request();
    let resp = actix_test::call_service(&app, req).await;

    assert_eq!(resp.status(), actix_web::http::StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn test_malformed_json_is_bad_request() {
    let app = test_app!(RankingSettings::default());

    let req = actix_test::TestRequest::post()
        .uri("/api/v1/score/job")
        .insert_header(("content-type", "application/json"))
        .set_payload("{ not json")
        .to_request();
    let resp = actix_test::call_service(&app, req).await;

    assert_eq!(resp.status(), actix_web::http::StatusCode::BAD_REQUEST);
    let body: serde_json::Value = actix_test::read_body_json(resp).await;
    assert_eq!(body["error"], "invalid_json");
}

#[actix_web::test]
async fn test_rank_jobs_min_score_from_settings() {
    let app = test_app!(RankingSettings {
        min_score: 60,
        ..Default::default()
    });

    let req = actix_test::TestRequest::post()
        .uri("/api/v1/rank/jobs")
        .set_json(json!({
            "filter": { "title": "Nurse" },
            "jobs": [
                { "id": "match", "title": "Night Nurse" },
                { "id": "miss", "title": "Welder" }
            ]
        }))
        .to_request();
    let body: RankResponse = actix_test::call_and_read_body_json(&app, req).await;

    assert_eq!(body.total_results, 2);
    assert_eq!(body.matches.len(), 1);
    assert_eq!(body.matches[0].id, "match");
}
