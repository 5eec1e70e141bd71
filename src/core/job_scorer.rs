use crate::core::{
    criteria::{
        fuzzy_match, present_items, score_all_covered, score_contains, score_distance_tier,
        score_each_required_item, score_exact_match, score_flag, score_maximum, score_membership,
        score_minimum, score_salary_overlap, score_set_overlap, score_subset,
    },
    distance::GeoPoint,
    language::meets_requirement,
};
use crate::models::{Criterion, CriterionScore, JobFilter, JobRecord, LanguageSkill, ScoreResult};

const TITLE_WEIGHT: f64 = 2.0;

/// Credit awarded for data the job simply does not state
const MISSING_DATA_CREDIT: f64 = 0.5;

/// Calculate how well a job satisfies a searcher's filter (0-100)
///
/// `flexible` switches skills, qualifications and languages from per-item
/// scoring to all-or-nothing coverage of the job's requirements, and lets a
/// job without licence requirements earn full credit.
pub fn score_job(job: &JobRecord, filter: &JobFilter, flexible: bool) -> ScoreResult {
    ScoreResult::from_criteria(&job_breakdown(job, filter, flexible))
}

/// Every criterion the filter sets, scored against `job`
pub fn job_breakdown(job: &JobRecord, filter: &JobFilter, flexible: bool) -> Vec<CriterionScore> {
    let license_credit = if flexible { 1.0 } else { MISSING_DATA_CREDIT };

    [
        score_contains(
            Criterion::Title,
            filter.title.as_deref(),
            job.title.as_deref(),
            TITLE_WEIGHT,
            MISSING_DATA_CREDIT,
        ),
        score_exact_match(
            Criterion::Sector,
            filter.sector.as_deref(),
            job.sector.as_deref(),
            1.0,
            MISSING_DATA_CREDIT,
        ),
        score_salary_overlap(
            &filter.salary_range,
            job.salary_min,
            job.salary_max,
            1.0,
            MISSING_DATA_CREDIT,
        ),
        location(job, filter),
        requirement_list(Criterion::Skills, &filter.skills, &job.required_skills, flexible),
        requirement_list(
            Criterion::Qualifications,
            &filter.qualifications,
            &job.required_qualifications,
            flexible,
        ),
        languages(&filter.languages, &job.required_languages, flexible),
        score_membership(
            Criterion::EmploymentType,
            &filter.employment_types,
            job.employment_type.as_deref(),
            1.0,
            MISSING_DATA_CREDIT,
        ),
        // The job's requirement must not exceed the searcher's experience,
        // identically in both modes.
        score_maximum(
            Criterion::Experience,
            filter.experience_years,
            job.experience_years,
            1.0,
            MISSING_DATA_CREDIT,
        ),
        score_exact_match(
            Criterion::CareerLevel,
            filter.career_level.as_deref(),
            job.career_level.as_deref(),
            1.0,
            MISSING_DATA_CREDIT,
        ),
        score_minimum(
            Criterion::Bonus,
            filter.min_entry_bonus,
            job.entry_bonus,
            1.0,
            MISSING_DATA_CREDIT,
        ),
        score_minimum(
            Criterion::VacationDays,
            filter.min_vacation_days,
            job.vacation_days,
            1.0,
            MISSING_DATA_CREDIT,
        ),
        score_subset(
            Criterion::DrivingLicenses,
            &filter.driving_licenses,
            &job.driving_licenses,
            1.0,
            license_credit,
        ),
        score_set_overlap(
            Criterion::ContractTerms,
            &filter.contract_terms,
            &job.contract_terms,
            1.0,
            MISSING_DATA_CREDIT,
        ),
        score_exact_match(
            Criterion::ContractDuration,
            filter.contract_duration.as_deref(),
            job.contract_duration.as_deref(),
            1.0,
            MISSING_DATA_CREDIT,
        ),
        home_office(job, filter),
        benefits(&filter.benefits, &job.benefits),
    ]
    .into_iter()
    .flatten()
    .collect()
}

/// Distance from the searcher's reference point to the job, when both are known
pub fn job_distance_km(job: &JobRecord, filter: &JobFilter) -> Option<f64> {
    let searcher = GeoPoint::from_parts(filter.latitude, filter.longitude)?;
    let posting = GeoPoint::from_parts(job.latitude, job.longitude)?;
    Some(searcher.distance_to(&posting))
}

/// Coordinates first, then city, then country
fn location(job: &JobRecord, filter: &JobFilter) -> Option<CriterionScore> {
    let searcher = GeoPoint::from_parts(filter.latitude, filter.longitude);
    let posting = GeoPoint::from_parts(job.latitude, job.longitude);
    if let (Some(searcher), Some(posting)) = (searcher, posting) {
        return Some(score_distance_tier(&searcher, &posting, filter.work_radius_km));
    }

    score_exact_match(
        Criterion::City,
        filter.city.as_deref(),
        job.city.as_deref(),
        1.0,
        MISSING_DATA_CREDIT,
    )
    .or_else(|| {
        score_exact_match(
            Criterion::Country,
            filter.country.as_deref(),
            job.country.as_deref(),
            1.0,
            MISSING_DATA_CREDIT,
        )
    })
}

/// Skills and qualifications share one shape
fn requirement_list(
    criterion: Criterion,
    held: &[String],
    required: &[String],
    flexible: bool,
) -> Option<CriterionScore> {
    let held = present_items(held);
    let required = present_items(required);

    if flexible {
        score_all_covered(criterion, &held, &required, |h, r| fuzzy_match(h, r))
    } else {
        score_each_required_item(
            criterion,
            &held,
            &required,
            |h, r| fuzzy_match(h, r),
            MISSING_DATA_CREDIT,
        )
    }
}

fn languages(
    held: &[LanguageSkill],
    required: &[LanguageSkill],
    flexible: bool,
) -> Option<CriterionScore> {
    let held: Vec<&LanguageSkill> = held.iter().filter(|l| !l.name.trim().is_empty()).collect();
    let required: Vec<&LanguageSkill> = required
        .iter()
        .filter(|l| !l.name.trim().is_empty())
        .collect();
    let satisfies = |h: &&LanguageSkill, r: &&LanguageSkill| {
        fuzzy_match(&h.name, &r.name) && meets_requirement(&h.level, &r.level)
    };

    if flexible {
        score_all_covered(Criterion::Languages, &held, &required, satisfies)
    } else {
        score_each_required_item(
            Criterion::Languages,
            &held,
            &required,
            satisfies,
            MISSING_DATA_CREDIT,
        )
    }
}

fn home_office(job: &JobRecord, filter: &JobFilter) -> Option<CriterionScore> {
    if !filter.home_office_required {
        return None;
    }
    score_flag(
        Criterion::HomeOffice,
        Some(true),
        job.home_office,
        1.0,
        MISSING_DATA_CREDIT,
    )
}

/// One point per requested benefit, no credit when the job lists none
fn benefits(requested: &[String], offered: &[String]) -> Option<CriterionScore> {
    let requested = present_items(requested);
    let offered = present_items(offered);
    score_each_required_item(
        Criterion::Benefits,
        &requested,
        &offered,
        |r, o| fuzzy_match(r, o),
        0.0,
    )
}
