use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::domain::{CandidateFilter, CandidateRecord, JobFilter, JobRecord};

/// Request to score a single job against a searcher's filter
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ScoreJobRequest {
    pub job: JobRecord,
    #[serde(default)]
    pub filter: JobFilter,
    /// Overrides `filter.flexibleMode` when present
    #[serde(default)]
    pub flexible: Option<bool>,
    #[serde(default)]
    pub explain: bool,
}

impl ScoreJobRequest {
    pub fn flexible(&self) -> bool {
        self.flexible.unwrap_or(self.filter.flexible_mode)
    }
}

/// Request to score a single candidate against an employer's filter
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ScoreCandidateRequest {
    pub candidate: CandidateRecord,
    #[serde(default)]
    pub filter: CandidateFilter,
    #[serde(default)]
    pub explain: bool,
}

/// Request to rank a batch of jobs
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RankJobsRequest {
    #[serde(default)]
    pub filter: JobFilter,
    #[validate(length(min = 1))]
    pub jobs: Vec<JobRecord>,
    #[serde(default)]
    pub flexible: Option<bool>,
    #[validate(range(min = 1))]
    pub limit: Option<u16>,
}

impl RankJobsRequest {
    pub fn flexible(&self) -> bool {
        self.flexible.unwrap_or(self.filter.flexible_mode)
    }
}

/// Request to rank a batch of candidates
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RankCandidatesRequest {
    #[serde(default)]
    pub filter: CandidateFilter,
    #[validate(length(min = 1))]
    pub candidates: Vec<CandidateRecord>,
    #[validate(range(min = 1))]
    pub limit: Option<u16>,
}
