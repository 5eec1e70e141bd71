use serde::{Deserialize, Serialize};

/// A language together with a proficiency level token (`A1`..`C2`, `native`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageSkill {
    pub name: String,
    #[serde(default)]
    pub level: String,
}

impl LanguageSkill {
    pub fn new(name: impl Into<String>, level: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            level: level.into(),
        }
    }
}

/// Inclusive numeric range where either bound may be open
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct NumericRange {
    #[serde(default)]
    pub min: Option<f64>,
    #[serde(default)]
    pub max: Option<f64>,
}

impl NumericRange {
    pub fn new(min: Option<f64>, max: Option<f64>) -> Self {
        Self { min, max }
    }

    pub fn between(min: f64, max: f64) -> Self {
        Self::new(Some(min), Some(max))
    }

    /// Bounds with malformed (non-finite or negative) values dropped
    pub fn sanitized(&self) -> Self {
        Self {
            min: self.min.filter(|v| v.is_finite() && *v >= 0.0),
            max: self.max.filter(|v| v.is_finite() && *v >= 0.0),
        }
    }

    /// A range is set when at least one usable bound is present
    pub fn is_set(&self) -> bool {
        let clean = self.sanitized();
        clean.min.is_some() || clean.max.is_some()
    }
}

/// Job posting as handed over by the persistence layer
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct JobRecord {
    #[serde(alias = "job_id", alias = "jobId")]
    pub id: String,
    #[serde(alias = "jobTitle")]
    pub title: Option<String>,
    #[serde(alias = "industry")]
    pub sector: Option<String>,
    pub salary_min: Option<f64>,
    pub salary_max: Option<f64>,
    /// Carried through for display; salary matching assumes one shared currency
    pub salary_currency: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub city: Option<String>,
    pub country: Option<String>,
    pub required_skills: Vec<String>,
    pub required_qualifications: Vec<String>,
    pub required_languages: Vec<LanguageSkill>,
    #[serde(alias = "jobType")]
    pub employment_type: Option<String>,
    pub career_level: Option<String>,
    #[serde(alias = "experienceRequirement")]
    pub experience_years: Option<f64>,
    pub entry_bonus: Option<f64>,
    pub vacation_days: Option<f64>,
    #[serde(alias = "requiredDrivingLicenses")]
    pub driving_licenses: Vec<String>,
    pub contract_terms: Vec<String>,
    pub contract_duration: Option<String>,
    pub benefits: Vec<String>,
    #[serde(alias = "homeOfficeAvailable")]
    pub home_office: Option<bool>,
}

/// Candidate profile as handed over by the persistence layer
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CandidateRecord {
    #[serde(alias = "candidate_id", alias = "candidateId")]
    pub id: String,
    #[serde(alias = "title")]
    pub job_title: Option<String>,
    #[serde(alias = "industry")]
    pub sector: Option<String>,
    pub gender: Option<String>,
    pub employment_status: Option<String>,
    pub salary_expectation_min: Option<f64>,
    pub salary_expectation_max: Option<f64>,
    pub desired_bonus: Option<f64>,
    pub desired_vacation_days: Option<f64>,
    pub skills: Vec<String>,
    pub qualifications: Vec<String>,
    pub languages: Vec<LanguageSkill>,
    #[serde(alias = "jobTypes")]
    pub preferred_job_types: Vec<String>,
    pub career_level: Option<String>,
    #[serde(alias = "yearsOfExperience")]
    pub experience_years: Option<f64>,
    pub notice_period: Option<String>,
    #[serde(alias = "preferredContractTerms")]
    pub contract_terms: Vec<String>,
    pub home_office_preference: Option<String>,
    /// Share of working time the candidate is willing to travel, in percent
    pub travel_willingness: Option<f64>,
    pub driving_licenses: Vec<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub city: Option<String>,
    pub tags: Vec<String>,
    pub is_refugee: Option<bool>,
    pub origin_country: Option<String>,
}

/// Search criteria entered by someone looking for a job
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct JobFilter {
    pub title: Option<String>,
    #[serde(alias = "industry")]
    pub sector: Option<String>,
    #[serde(alias = "salary")]
    pub salary_range: NumericRange,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    #[serde(alias = "radiusKm")]
    pub work_radius_km: Option<f64>,
    pub city: Option<String>,
    pub country: Option<String>,
    pub skills: Vec<String>,
    pub qualifications: Vec<String>,
    pub languages: Vec<LanguageSkill>,
    #[serde(alias = "jobTypes")]
    pub employment_types: Vec<String>,
    pub experience_years: Option<f64>,
    pub career_level: Option<String>,
    pub min_entry_bonus: Option<f64>,
    pub min_vacation_days: Option<f64>,
    pub driving_licenses: Vec<String>,
    pub contract_terms: Vec<String>,
    pub contract_duration: Option<String>,
    pub home_office_required: bool,
    pub benefits: Vec<String>,
    #[serde(alias = "allowOverqualification")]
    pub flexible_mode: bool,
}

/// Location block of an employer's candidate search
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LocationFilter {
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    #[serde(alias = "workRadiusKm")]
    pub radius_km: Option<f64>,
    pub city: Option<String>,
}

/// Search criteria entered by an employer looking for candidates
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CandidateFilter {
    #[serde(alias = "jobTitle")]
    pub title: Option<String>,
    #[serde(alias = "industry")]
    pub sector: Option<String>,
    pub genders: Vec<String>,
    pub employment_statuses: Vec<String>,
    #[serde(alias = "salary")]
    pub salary_range: NumericRange,
    pub max_bonus: Option<f64>,
    pub max_vacation_days: Option<f64>,
    pub location: LocationFilter,
    pub skills: Vec<String>,
    pub qualifications: Vec<String>,
    pub languages: Vec<LanguageSkill>,
    #[serde(alias = "jobTypes")]
    pub employment_types: Vec<String>,
    pub career_level: Option<String>,
    pub experience_years: NumericRange,
    pub allow_overqualification: bool,
    pub notice_periods: Vec<String>,
    pub contract_terms: Vec<String>,
    pub home_office_preferences: Vec<String>,
    pub travel_willingness: NumericRange,
    pub driving_licenses: Vec<String>,
    pub tags: Vec<String>,
    pub is_refugee: Option<bool>,
    pub origin_country: Option<String>,
}
