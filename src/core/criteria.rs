//! Generic criterion evaluators shared by both scorers.
//!
//! Every evaluator follows the same contract: it returns `None` when the
//! searcher did not set the criterion (so it touches neither accumulator), and
//! otherwise a [`CriterionScore`] whose `weight` counts toward the total and
//! whose `earned` share counts toward the matched amount. Missing data on the
//! record side earns `partial * weight` instead of failing outright.

use crate::core::distance::GeoPoint;
use crate::models::{Criterion, CriterionScore, NumericRange};

/// Work radius used when the filter does not carry a usable one
pub const DEFAULT_WORK_RADIUS_KM: f64 = 50.0;

/// Weight of the coordinate-based location criterion
pub const DISTANCE_WEIGHT: f64 = 2.0;

/// Trimmed, non-blank view of an optional string
#[inline]
pub fn present(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Finite, non-negative view of an optional number
#[inline]
pub fn present_number(value: Option<f64>) -> Option<f64> {
    value.filter(|v| v.is_finite() && *v >= 0.0)
}

/// Non-blank, trimmed items of a list
pub fn present_items(items: &[String]) -> Vec<&str> {
    items
        .iter()
        .map(|item| item.trim())
        .filter(|item| !item.is_empty())
        .collect()
}

/// Case-insensitive substring match in either direction.
///
/// "Rust" matches "rust programming" and vice versa; blank strings match nothing.
pub fn fuzzy_match(a: &str, b: &str) -> bool {
    let a = a.trim().to_lowercase();
    let b = b.trim().to_lowercase();
    if a.is_empty() || b.is_empty() {
        return false;
    }
    a.contains(&b) || b.contains(&a)
}

/// `haystack` contains `needle`, ignoring case
pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.trim().to_lowercase())
}

#[inline]
fn partial_credit(criterion: Criterion, weight: f64, partial: f64) -> CriterionScore {
    CriterionScore::new(criterion, weight, weight * partial)
}

#[inline]
fn pass_fail(criterion: Criterion, weight: f64, passed: bool) -> CriterionScore {
    if passed {
        CriterionScore::full(criterion, weight)
    } else {
        CriterionScore::none(criterion, weight)
    }
}

/// Exact (trimmed) string equality
pub fn score_exact_match(
    criterion: Criterion,
    wanted: Option<&str>,
    actual: Option<&str>,
    weight: f64,
    partial: f64,
) -> Option<CriterionScore> {
    let wanted = present(wanted)?;
    Some(match present(actual) {
        None => partial_credit(criterion, weight, partial),
        Some(actual) => pass_fail(criterion, weight, actual == wanted),
    })
}

/// Record value contains the wanted text, ignoring case
pub fn score_contains(
    criterion: Criterion,
    wanted: Option<&str>,
    actual: Option<&str>,
    weight: f64,
    partial: f64,
) -> Option<CriterionScore> {
    let wanted = present(wanted)?;
    Some(match present(actual) {
        None => partial_credit(criterion, weight, partial),
        Some(actual) => pass_fail(criterion, weight, contains_ignore_case(actual, wanted)),
    })
}

/// Record value is one of the accepted values
pub fn score_membership(
    criterion: Criterion,
    accepted: &[String],
    actual: Option<&str>,
    weight: f64,
    partial: f64,
) -> Option<CriterionScore> {
    let accepted = present_items(accepted);
    if accepted.is_empty() {
        return None;
    }
    Some(match present(actual) {
        None => partial_credit(criterion, weight, partial),
        Some(actual) => pass_fail(criterion, weight, accepted.contains(&actual)),
    })
}

/// At least one wanted value appears in the record's list.
///
/// An empty record list earns `partial_on_empty * weight`.
pub fn score_set_overlap(
    criterion: Criterion,
    wanted: &[String],
    actual: &[String],
    weight: f64,
    partial_on_empty: f64,
) -> Option<CriterionScore> {
    let wanted = present_items(wanted);
    if wanted.is_empty() {
        return None;
    }
    let actual = present_items(actual);
    if actual.is_empty() {
        return Some(partial_credit(criterion, weight, partial_on_empty));
    }
    let overlaps = wanted.iter().any(|w| actual.contains(w));
    Some(pass_fail(criterion, weight, overlaps))
}

/// Everything the record requires is among the held values, ignoring ASCII case.
///
/// A record that requires nothing earns `partial_on_empty * weight`.
pub fn score_subset(
    criterion: Criterion,
    held: &[String],
    required: &[String],
    weight: f64,
    partial_on_empty: f64,
) -> Option<CriterionScore> {
    let held = present_items(held);
    if held.is_empty() {
        return None;
    }
    let required = present_items(required);
    if required.is_empty() {
        return Some(partial_credit(criterion, weight, partial_on_empty));
    }
    let covered = required
        .iter()
        .all(|r| held.iter().any(|h| h.eq_ignore_ascii_case(r)));
    Some(pass_fail(criterion, weight, covered))
}

/// Score each wanted item on its own, one point per item.
///
/// An item earns a point when any record item satisfies `matches`. If the
/// record list is empty every item earns `partial_on_empty` instead.
pub fn score_each_required_item<W, A>(
    criterion: Criterion,
    wanted: &[W],
    actual: &[A],
    matches: impl Fn(&W, &A) -> bool,
    partial_on_empty: f64,
) -> Option<CriterionScore> {
    if wanted.is_empty() {
        return None;
    }
    let weight = wanted.len() as f64;
    if actual.is_empty() {
        return Some(partial_credit(criterion, weight, partial_on_empty));
    }
    let hits = wanted
        .iter()
        .filter(|w| actual.iter().any(|a| matches(w, a)))
        .count();
    Some(CriterionScore::new(criterion, weight, hits as f64))
}

/// Score a whole category as one unit: full when every required item is
/// covered by some held item (or nothing is required), otherwise zero.
pub fn score_all_covered<H, R>(
    criterion: Criterion,
    held: &[H],
    required: &[R],
    covers: impl Fn(&H, &R) -> bool,
) -> Option<CriterionScore> {
    if held.is_empty() {
        return None;
    }
    let covered = required
        .iter()
        .all(|r| held.iter().any(|h| covers(h, r)));
    Some(pass_fail(criterion, 1.0, covered))
}

/// Record value is at least `minimum`
pub fn score_minimum(
    criterion: Criterion,
    minimum: Option<f64>,
    actual: Option<f64>,
    weight: f64,
    partial: f64,
) -> Option<CriterionScore> {
    let minimum = present_number(minimum)?;
    Some(match present_number(actual) {
        None => partial_credit(criterion, weight, partial),
        Some(actual) => pass_fail(criterion, weight, actual >= minimum),
    })
}

/// Record value is at most `maximum`
pub fn score_maximum(
    criterion: Criterion,
    maximum: Option<f64>,
    actual: Option<f64>,
    weight: f64,
    partial: f64,
) -> Option<CriterionScore> {
    let maximum = present_number(maximum)?;
    Some(match present_number(actual) {
        None => partial_credit(criterion, weight, partial),
        Some(actual) => pass_fail(criterion, weight, actual <= maximum),
    })
}

/// Record value lies inside `range`; with `lower_only` the upper bound is ignored
pub fn score_range(
    criterion: Criterion,
    range: &NumericRange,
    actual: Option<f64>,
    weight: f64,
    partial: f64,
    lower_only: bool,
) -> Option<CriterionScore> {
    let range = range.sanitized();
    let max = if lower_only { None } else { range.max };
    if range.min.is_none() && max.is_none() {
        return None;
    }
    Some(match present_number(actual) {
        None => partial_credit(criterion, weight, partial),
        Some(actual) => {
            let above = range.min.map_or(true, |min| actual >= min);
            let below = max.map_or(true, |max| actual <= max);
            pass_fail(criterion, weight, above && below)
        }
    })
}

/// Wanted range overlaps the record's `[min, max]`.
///
/// A record with only one bound is treated as the single point it gives.
/// Both sides are assumed to be in the same currency; no conversion happens.
pub fn score_salary_overlap(
    wanted: &NumericRange,
    actual_min: Option<f64>,
    actual_max: Option<f64>,
    weight: f64,
    partial: f64,
) -> Option<CriterionScore> {
    if !wanted.is_set() {
        return None;
    }
    let wanted = wanted.sanitized();
    let actual_min = present_number(actual_min);
    let actual_max = present_number(actual_max);
    let (low, high) = match (actual_min.or(actual_max), actual_max.or(actual_min)) {
        (Some(low), Some(high)) => (low, high),
        _ => return Some(partial_credit(Criterion::Salary, weight, partial)),
    };
    let wanted_low = wanted.min.unwrap_or(0.0);
    let wanted_high = wanted.max.unwrap_or(f64::INFINITY);
    let overlaps = high >= wanted_low && low <= wanted_high;
    Some(pass_fail(Criterion::Salary, weight, overlaps))
}

/// Boolean flag equality
pub fn score_flag(
    criterion: Criterion,
    wanted: Option<bool>,
    actual: Option<bool>,
    weight: f64,
    partial: f64,
) -> Option<CriterionScore> {
    let wanted = wanted?;
    Some(match actual {
        None => partial_credit(criterion, weight, partial),
        Some(actual) => pass_fail(criterion, weight, actual == wanted),
    })
}

/// Radius to tier against, falling back to [`DEFAULT_WORK_RADIUS_KM`] for
/// missing, non-positive or non-finite values
#[inline]
pub fn effective_radius(radius_km: Option<f64>) -> f64 {
    radius_km
        .filter(|r| r.is_finite() && *r > 0.0)
        .unwrap_or(DEFAULT_WORK_RADIUS_KM)
}

/// Earned share of [`DISTANCE_WEIGHT`] for a distance and radius:
/// full within `r`, half within `2r`, a quarter within `4r`, nothing beyond.
pub fn distance_tier_credit(distance_km: f64, radius_km: f64) -> f64 {
    if distance_km <= radius_km {
        DISTANCE_WEIGHT
    } else if distance_km <= 2.0 * radius_km {
        DISTANCE_WEIGHT / 2.0
    } else if distance_km <= 4.0 * radius_km {
        DISTANCE_WEIGHT / 4.0
    } else {
        0.0
    }
}

/// Tiered location criterion between two known points
pub fn score_distance_tier(from: &GeoPoint, to: &GeoPoint, radius_km: Option<f64>) -> CriterionScore {
    let distance = from.distance_to(to);
    let earned = distance_tier_credit(distance, effective_radius(radius_km));
    CriterionScore::new(Criterion::Distance, DISTANCE_WEIGHT, earned)
}
