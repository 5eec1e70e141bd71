use serde::{Deserialize, Serialize};

/// Identifies which comparison produced a [`CriterionScore`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Criterion {
    Title,
    Sector,
    Gender,
    EmploymentStatus,
    Salary,
    Bonus,
    VacationDays,
    Distance,
    City,
    Country,
    Skills,
    Qualifications,
    Languages,
    EmploymentType,
    Experience,
    CareerLevel,
    NoticePeriod,
    DrivingLicenses,
    ContractTerms,
    ContractDuration,
    HomeOffice,
    TravelWillingness,
    Benefits,
    Tags,
    RefugeeStatus,
    OriginCountry,
}

/// Contribution of one evaluated criterion: `weight` goes to the total,
/// `earned` (0..=weight) goes to the matched accumulator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CriterionScore {
    pub criterion: Criterion,
    pub weight: f64,
    pub earned: f64,
}

impl CriterionScore {
    pub fn new(criterion: Criterion, weight: f64, earned: f64) -> Self {
        Self {
            criterion,
            weight,
            earned,
        }
    }

    pub fn full(criterion: Criterion, weight: f64) -> Self {
        Self::new(criterion, weight, weight)
    }

    pub fn none(criterion: Criterion, weight: f64) -> Self {
        Self::new(criterion, weight, 0.0)
    }
}

/// Outcome of scoring one record against one filter
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreResult {
    pub score: u8,
    pub matched: f64,
    pub total: f64,
}

impl ScoreResult {
    /// Fold criterion contributions into a percentage.
    ///
    /// A total of zero means the filter set no criteria at all, which counts
    /// as a perfect match.
    pub fn from_criteria(criteria: &[CriterionScore]) -> Self {
        let (matched, total) = criteria
            .iter()
            .fold((0.0, 0.0), |(m, t), c| (m + c.earned, t + c.weight));

        Self::from_parts(matched, total)
    }

    pub fn from_parts(matched: f64, total: f64) -> Self {
        let score = if total <= 0.0 {
            100
        } else {
            (100.0 * matched / total).round().clamp(0.0, 100.0) as u8
        };

        Self {
            score,
            matched,
            total,
        }
    }
}

/// One ranked record as returned by the ranker
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedMatch {
    pub id: String,
    pub score: u8,
    pub matched: f64,
    pub total: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance_km: Option<f64>,
}

impl RankedMatch {
    pub fn new(id: String, result: ScoreResult, distance_km: Option<f64>) -> Self {
        Self {
            id,
            score: result.score,
            matched: result.matched,
            total: result.total,
            distance_km,
        }
    }
}
