//! Jobmatch Engine - relevance scoring for the recruitment marketplace
//!
//! Scores job postings against a searcher's filter and candidate profiles
//! against an employer's filter. Each score is a conditional match
//! percentage over only the criteria the filter actually sets.

pub mod config;
pub mod core;
pub mod error;
pub mod models;
pub mod routes;

// Re-export commonly used types
pub use crate::core::{haversine_distance, meets_requirement, score_candidate, score_job, Ranker};
pub use crate::models::{CandidateFilter, CandidateRecord, JobFilter, JobRecord, ScoreResult};
