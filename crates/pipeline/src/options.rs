//! Selectable filter options.
//!
//! Location, grade, role and skill options are derived from the loaded
//! candidates. Clearance and availability options are fixed.

use crate::selection::{ANY, MinAvailability};
use candidates::{CandidateSummary, Clearance};
use serde::Serialize;
use std::cmp::Ordering;
use std::collections::HashSet;

/// Option lists for every filter field. Each list starts with "Any".
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterOptions {
    pub locations: Vec<String>,
    pub grades: Vec<String>,
    pub clearances: Vec<String>,
    pub availabilities: Vec<String>,
    pub roles: Vec<String>,
    pub skills: Vec<String>,
}

impl FilterOptions {
    /// Build option lists from a candidate collection.
    ///
    /// ## Algorithm
    /// 1. Collect distinct non-empty countries, departments and CV titles
    /// 2. Collect distinct skill tokens (split on commas, trimmed)
    /// 3. Sort each set with `locale_cmp` and put "Any" in front
    pub fn derive(candidates: &[CandidateSummary]) -> Self {
        let mut locations = HashSet::new();
        let mut grades = HashSet::new();
        let mut roles = HashSet::new();
        let mut skills = HashSet::new();

        for candidate in candidates {
            if let Some(country) = non_empty(&candidate.country) {
                locations.insert(country);
            }
            if let Some(department) = non_empty(&candidate.department) {
                grades.insert(department);
            }
            if let Some(title) = non_empty(&candidate.latest_cv_title) {
                roles.insert(title);
            }
            skills.extend(candidate.skill_tokens());
        }

        Self {
            locations: with_any(locations),
            grades: with_any(grades),
            clearances: static_options(Clearance::FILTERABLE.iter().map(Clearance::label)),
            availabilities: static_options(MinAvailability::ALL.into_iter().map(MinAvailability::label)),
            roles: with_any(roles),
            skills: with_any(skills),
        }
    }
}

impl Default for FilterOptions {
    fn default() -> Self {
        Self::derive(&[])
    }
}

/// Locale-style ordering: case-insensitive first, then lowercase before
/// uppercase for strings that differ only in case.
///
/// Accents are not folded: letters outside ASCII compare by code point, so
/// `"Émile"` sorts after `"Zoe"` where a collating locale would put it
/// among the E's.
pub fn locale_cmp(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| b.cmp(a))
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

fn with_any(values: HashSet<&str>) -> Vec<String> {
    let mut sorted: Vec<&str> = values.into_iter().collect();
    sorted.sort_by(|a, b| locale_cmp(a, b));
    static_options(sorted)
}

fn static_options<'a>(values: impl IntoIterator<Item = &'a str>) -> Vec<String> {
    std::iter::once(ANY)
        .chain(values)
        .map(str::to_string)
        .collect()
}
