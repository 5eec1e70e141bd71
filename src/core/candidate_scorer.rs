use crate::core::{
    criteria::{
        fuzzy_match, present_items, score_contains, score_distance_tier, score_each_required_item,
        score_exact_match, score_flag, score_maximum, score_membership, score_range,
        score_salary_overlap, score_set_overlap,
    },
    distance::GeoPoint,
    language::meets_requirement,
};
use crate::models::{
    CandidateFilter, CandidateRecord, Criterion, CriterionScore, LanguageSkill, ScoreResult,
};

const TITLE_WEIGHT: f64 = 2.0;

/// Credit for a scalar value the candidate did not fill in
const MISSING_DATA_CREDIT: f64 = 0.5;

/// List criteria are hard wants: an empty candidate list earns nothing
const EMPTY_LIST_CREDIT: f64 = 0.0;

/// Calculate how well a candidate satisfies an employer's filter (0-100)
///
/// Unlike job scoring there is no flexible mode. Every list criterion is
/// scored per requested item and a candidate who lists nothing for it gets
/// no partial credit.
pub fn score_candidate(candidate: &CandidateRecord, filter: &CandidateFilter) -> ScoreResult {
    ScoreResult::from_criteria(&candidate_breakdown(candidate, filter))
}

/// Every criterion the filter sets, scored against `candidate`
pub fn candidate_breakdown(
    candidate: &CandidateRecord,
    filter: &CandidateFilter,
) -> Vec<CriterionScore> {
    [
        score_contains(
            Criterion::Title,
            filter.title.as_deref(),
            candidate.job_title.as_deref(),
            TITLE_WEIGHT,
            MISSING_DATA_CREDIT,
        ),
        score_exact_match(
            Criterion::Sector,
            filter.sector.as_deref(),
            candidate.sector.as_deref(),
            1.0,
            MISSING_DATA_CREDIT,
        ),
        score_membership(
            Criterion::Gender,
            &filter.genders,
            candidate.gender.as_deref(),
            1.0,
            MISSING_DATA_CREDIT,
        ),
        score_membership(
            Criterion::EmploymentStatus,
            &filter.employment_statuses,
            candidate.employment_status.as_deref(),
            1.0,
            MISSING_DATA_CREDIT,
        ),
        score_salary_overlap(
            &filter.salary_range,
            candidate.salary_expectation_min,
            candidate.salary_expectation_max,
            1.0,
            MISSING_DATA_CREDIT,
        ),
        score_maximum(
            Criterion::Bonus,
            filter.max_bonus,
            candidate.desired_bonus,
            1.0,
            MISSING_DATA_CREDIT,
        ),
        score_maximum(
            Criterion::VacationDays,
            filter.max_vacation_days,
            candidate.desired_vacation_days,
            1.0,
            MISSING_DATA_CREDIT,
        ),
        location(candidate, filter),
        per_item(Criterion::Skills, &filter.skills, &candidate.skills),
        per_item(
            Criterion::Qualifications,
            &filter.qualifications,
            &candidate.qualifications,
        ),
        languages(&filter.languages, &candidate.languages),
        score_set_overlap(
            Criterion::EmploymentType,
            &filter.employment_types,
            &candidate.preferred_job_types,
            1.0,
            EMPTY_LIST_CREDIT,
        ),
        score_exact_match(
            Criterion::CareerLevel,
            filter.career_level.as_deref(),
            candidate.career_level.as_deref(),
            1.0,
            MISSING_DATA_CREDIT,
        ),
        score_range(
            Criterion::Experience,
            &filter.experience_years,
            candidate.experience_years,
            1.0,
            MISSING_DATA_CREDIT,
            filter.allow_overqualification,
        ),
        score_membership(
            Criterion::NoticePeriod,
            &filter.notice_periods,
            candidate.notice_period.as_deref(),
            1.0,
            MISSING_DATA_CREDIT,
        ),
        score_set_overlap(
            Criterion::ContractTerms,
            &filter.contract_terms,
            &candidate.contract_terms,
            1.0,
            EMPTY_LIST_CREDIT,
        ),
        score_membership(
            Criterion::HomeOffice,
            &filter.home_office_preferences,
            candidate.home_office_preference.as_deref(),
            1.0,
            MISSING_DATA_CREDIT,
        ),
        score_range(
            Criterion::TravelWillingness,
            &filter.travel_willingness,
            candidate.travel_willingness,
            1.0,
            MISSING_DATA_CREDIT,
            false,
        ),
        driving_licenses(&filter.driving_licenses, &candidate.driving_licenses),
        per_item(Criterion::Tags, &filter.tags, &candidate.tags),
        score_flag(
            Criterion::RefugeeStatus,
            filter.is_refugee,
            candidate.is_refugee,
            1.0,
            MISSING_DATA_CREDIT,
        ),
        score_exact_match(
            Criterion::OriginCountry,
            filter.origin_country.as_deref(),
            candidate.origin_country.as_deref(),
            1.0,
            MISSING_DATA_CREDIT,
        ),
    ]
    .into_iter()
    .flatten()
    .collect()
}

/// Distance from the employer's search location to the candidate, when both are known
pub fn candidate_distance_km(candidate: &CandidateRecord, filter: &CandidateFilter) -> Option<f64> {
    let origin = GeoPoint::from_parts(filter.location.latitude, filter.location.longitude)?;
    let home = GeoPoint::from_parts(candidate.latitude, candidate.longitude)?;
    Some(origin.distance_to(&home))
}

/// Coordinates first, then a city substring match
fn location(candidate: &CandidateRecord, filter: &CandidateFilter) -> Option<CriterionScore> {
    let origin = GeoPoint::from_parts(filter.location.latitude, filter.location.longitude);
    let home = GeoPoint::from_parts(candidate.latitude, candidate.longitude);
    if let (Some(origin), Some(home)) = (origin, home) {
        return Some(score_distance_tier(&origin, &home, filter.location.radius_km));
    }

    score_contains(
        Criterion::City,
        filter.location.city.as_deref(),
        candidate.city.as_deref(),
        1.0,
        MISSING_DATA_CREDIT,
    )
}

fn per_item(criterion: Criterion, wanted: &[String], held: &[String]) -> Option<CriterionScore> {
    let wanted = present_items(wanted);
    let held = present_items(held);
    score_each_required_item(
        criterion,
        &wanted,
        &held,
        |w, h| fuzzy_match(w, h),
        EMPTY_LIST_CREDIT,
    )
}

/// Licence classes are compared ignoring ASCII case, one point per required class
fn driving_licenses(required: &[String], held: &[String]) -> Option<CriterionScore> {
    let required = present_items(required);
    let held = present_items(held);
    score_each_required_item(
        Criterion::DrivingLicenses,
        &required,
        &held,
        |r, h| r.eq_ignore_ascii_case(h),
        EMPTY_LIST_CREDIT,
    )
}

fn languages(required: &[LanguageSkill], held: &[LanguageSkill]) -> Option<CriterionScore> {
    let required: Vec<&LanguageSkill> = required
        .iter()
        .filter(|l| !l.name.trim().is_empty())
        .collect();
    score_each_required_item(
        Criterion::Languages,
        &required,
        held,
        |r, h| fuzzy_match(&r.name, &h.name) && meets_requirement(&h.level, &r.level),
        EMPTY_LIST_CREDIT,
    )
}
