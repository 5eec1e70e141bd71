use std::cmp::Ordering;

use crate::core::{
    candidate_scorer::{candidate_distance_km, score_candidate},
    job_scorer::{job_distance_km, score_job},
};
use crate::models::{CandidateFilter, CandidateRecord, JobFilter, JobRecord, RankedMatch};

/// Result of a ranking pass
#[derive(Debug)]
pub struct RankResult {
    pub matches: Vec<RankedMatch>,
    pub total_candidates: usize,
}

/// Scores a batch of records against one filter and orders them
///
/// # Pipeline Stages
/// 1. Score every record independently
/// 2. Drop records below the minimum score
/// 3. Sort by score (descending), distance (ascending), id
/// 4. Truncate to the requested limit
#[derive(Debug, Clone)]
pub struct Ranker {
    min_score: u8,
}

impl Ranker {
    pub fn new(min_score: u8) -> Self {
        Self {
            min_score: min_score.min(100),
        }
    }

    pub fn min_score(&self) -> u8 {
        self.min_score
    }

    /// Rank jobs for a searcher
    ///
    /// # Arguments
    /// * `filter` - The searcher's criteria
    /// * `jobs` - Postings supplied by the caller
    /// * `flexible` - Whether to use flexible (overqualification) scoring
    /// * `limit` - Maximum number of matches to return
    pub fn rank_jobs(
        &self,
        filter: &JobFilter,
        jobs: &[JobRecord],
        flexible: bool,
        limit: usize,
    ) -> RankResult {
        let matches = jobs
            .iter()
            .map(|job| {
                RankedMatch::new(
                    job.id.clone(),
                    score_job(job, filter, flexible),
                    job_distance_km(job, filter),
                )
            })
            .collect();

        self.finish(matches, jobs.len(), limit)
    }

    /// Rank candidates for an employer
    pub fn rank_candidates(
        &self,
        filter: &CandidateFilter,
        candidates: &[CandidateRecord],
        limit: usize,
    ) -> RankResult {
        let matches = candidates
            .iter()
            .map(|candidate| {
                RankedMatch::new(
                    candidate.id.clone(),
                    score_candidate(candidate, filter),
                    candidate_distance_km(candidate, filter),
                )
            })
            .collect();

        self.finish(matches, candidates.len(), limit)
    }

    fn finish(&self, matches: Vec<RankedMatch>, total_candidates: usize, limit: usize) -> RankResult {
        let mut matches: Vec<RankedMatch> = matches
            .into_iter()
            .filter(|m| m.score >= self.min_score)
            .collect();

        matches.sort_by(|a, b| {
            b.score
                .cmp(&a.score)
                .then_with(|| compare_distance(a.distance_km, b.distance_km))
                .then_with(|| a.id.cmp(&b.id))
        });

        tracing::debug!(
            "Ranked {} of {} records (min score {}), returning up to {}",
            matches.len(),
            total_candidates,
            self.min_score,
            limit
        );

        matches.truncate(limit);

        RankResult {
            matches,
            total_candidates,
        }
    }
}

impl Default for Ranker {
    fn default() -> Self {
        Self::new(0)
    }
}

/// Known distances first, nearest first
fn compare_distance(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.partial_cmp(&b).unwrap_or(Ordering::Equal),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
