use serde::{Deserialize, Serialize};

use crate::models::score::{CriterionScore, RankedMatch, ScoreResult};

/// Response for the single-record scoring endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreResponse {
    pub score: u8,
    pub matched: f64,
    pub total: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub breakdown: Option<Vec<CriterionScore>>,
}

impl ScoreResponse {
    pub fn new(result: ScoreResult, breakdown: Option<Vec<CriterionScore>>) -> Self {
        Self {
            score: result.score,
            matched: result.matched,
            total: result.total,
            breakdown,
        }
    }
}

/// Response for the ranking endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankResponse {
    pub matches: Vec<RankedMatch>,
    pub total_results: usize,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
