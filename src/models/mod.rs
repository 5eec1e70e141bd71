// Model exports
pub mod domain;
pub mod requests;
pub mod responses;
pub mod score;

pub use domain::{CandidateFilter, CandidateRecord, JobFilter, JobRecord, LanguageSkill, LocationFilter, NumericRange};
pub use requests::{RankCandidatesRequest, RankJobsRequest, ScoreCandidateRequest, ScoreJobRequest};
pub use responses::{ErrorResponse, HealthResponse, RankResponse, ScoreResponse};
pub use score::{Criterion, CriterionScore, RankedMatch, ScoreResult};
