use actix_web::{web, HttpResponse, Responder};
use validator::Validate;

use crate::config::RankingSettings;
use crate::core::{candidate_breakdown, job_breakdown, Ranker};
use crate::error::ApiError;
use crate::models::{
    HealthResponse, RankCandidatesRequest, RankJobsRequest, RankResponse, ScoreCandidateRequest,
    ScoreJobRequest, ScoreResponse, ScoreResult,
};

/// Application state shared across all handlers
#[derive(Debug, Clone)]
pub struct AppState {
    pub ranker: Ranker,
    pub ranking: RankingSettings,
}

impl AppState {
    pub fn new(ranking: RankingSettings) -> Self {
        Self {
            ranker: Ranker::new(ranking.min_score),
            ranking,
        }
    }
}

/// Configure all scoring routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/score/job", web::post().to(score_job))
        .route("/score/candidate", web::post().to(score_candidate))
        .route("/rank/jobs", web::post().to(rank_jobs))
        .route("/rank/candidates", web::post().to(rank_candidates));
}

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Score one job for a searcher
///
/// POST /api/v1/score/job
///
/// Request body:
/// ```json
/// {
///   "job": { "title": "Backend Engineer", "city": "Berlin" },
///   "filter": { "title": "Backend", "city": "Berlin" },
///   "flexible": false,
///   "explain": true
/// }
/// ```
async fn score_job(req: web::Json<ScoreJobRequest>) -> Result<HttpResponse, ApiError> {
    req.validate()?;

    let flexible = req.flexible();
    let breakdown = job_breakdown(&req.job, &req.filter, flexible);
    let result = ScoreResult::from_criteria(&breakdown);

    tracing::info!(
        "Scored job {:?}: {} ({}/{}, flexible={})",
        req.job.id,
        result.score,
        result.matched,
        result.total,
        flexible
    );

    Ok(HttpResponse::Ok().json(ScoreResponse::new(result, req.explain.then_some(breakdown))))
}

/// Score one candidate for an employer
///
/// POST /api/v1/score/candidate
async fn score_candidate(req: web::Json<ScoreCandidateRequest>) -> Result<HttpResponse, ApiError> {
    req.validate()?;

    let breakdown = candidate_breakdown(&req.candidate, &req.filter);
    let result = ScoreResult::from_criteria(&breakdown);

    tracing::info!(
        "Scored candidate {:?}: {} ({}/{})",
        req.candidate.id,
        result.score,
        result.matched,
        result.total
    );

    Ok(HttpResponse::Ok().json(ScoreResponse::new(result, req.explain.then_some(breakdown))))
}

/// Rank a batch of jobs
///
/// POST /api/v1/rank/jobs
///
/// Request body:
/// ```json
/// {
///   "filter": { "title": "Backend", "latitude": 52.52, "longitude": 13.405 },
///   "jobs": [ { "id": "job-1", "title": "Backend Engineer" } ],
///   "flexible": false,
///   "limit": 20
/// }
/// ```
async fn rank_jobs(
    state: web::Data<AppState>,
    req: web::Json<RankJobsRequest>,
) -> Result<HttpResponse, ApiError> {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for rank_jobs request: field_errors={:?}", errors);
        return Err(errors.into());
    }

    let limit = state.ranking.effective_limit(req.limit);
    let result = state
        .ranker
        .rank_jobs(&req.filter, &req.jobs, req.flexible(), limit);

    tracing::info!(
        "Returning {} of {} jobs",
        result.matches.len(),
        result.total_candidates
    );

    Ok(HttpResponse::Ok().json(RankResponse {
        matches: result.matches,
        total_results: result.total_candidates,
    }))
}

/// Rank a batch of candidates
///
/// POST /api/v1/rank/candidates
async fn rank_candidates(
    state: web::Data<AppState>,
    req: web::Json<RankCandidatesRequest>,
) -> Result<HttpResponse, ApiError> {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for rank_candidates request: field_errors={:?}", errors);
        return Err(errors.into());
    }

    let limit = state.ranking.effective_limit(req.limit);
    let result = state
        .ranker
        .rank_candidates(&req.filter, &req.candidates, limit);

    tracing::info!(
        "Returning {} of {} candidates",
        result.matches.len(),
        result.total_candidates
    );

    Ok(HttpResponse::Ok().json(RankResponse {
        matches: result.matches,
        total_results: result.total_candidates,
    }))
}
