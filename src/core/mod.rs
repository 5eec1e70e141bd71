// Core algorithm exports
pub mod candidate_scorer;
pub mod criteria;
pub mod distance;
pub mod job_scorer;
pub mod language;
pub mod ranker;

pub use candidate_scorer::{candidate_breakdown, candidate_distance_km, score_candidate};
pub use criteria::{fuzzy_match, DEFAULT_WORK_RADIUS_KM};
pub use distance::{haversine_distance, GeoPoint};
pub use job_scorer::{job_breakdown, job_distance_km, score_job};
pub use language::{meets_requirement, LanguageLevel, LanguageLevelError};
pub use ranker::{RankResult, Ranker};
