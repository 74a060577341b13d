//! The FilterPipeline orchestrates multiple filters.
//!
//! This module provides the main FilterPipeline struct that chains
//! filters together, either by hand with the builder pattern or straight
//! from a `FilterSelection`.

use crate::filters::{
    AvailabilityFilter, ClearanceFilter, GradeFilter, LocationFilter, RoleFilter, SkillsFilter,
};
use crate::selection::FilterSelection;
use crate::traits::Filter;
use candidates::CandidateSummary;

/// Chains multiple filters together into a processing pipeline.
///
/// ## Usage
/// ```ignore
/// let pipeline = FilterPipeline::new()
///     .add_filter(LocationFilter::new("UK"))
///     .add_filter(AvailabilityFilter::new(MinAvailability::Pct50));
///
/// let filtered = pipeline.apply(candidates);
/// ```
pub struct FilterPipeline {
    filters: Vec<Box<dyn Filter>>,
}

impl FilterPipeline {
    /// Create a new empty FilterPipeline.
    pub fn new() -> Self {
        Self {
            filters: Vec::new(),
        }
    }

    /// Build the pipeline for a selection.
    ///
    /// One filter per field that is not "Any", so an unrestricted selection
    /// gives an empty pipeline that passes everything through.
    pub fn from_selection(selection: &FilterSelection) -> Self {
        let mut pipeline = Self::new();
        if let Some(location) = selection.location.value() {
            pipeline = pipeline.add_filter(LocationFilter::new(location.as_str()));
        }
        if let Some(grade) = selection.grade.value() {
            pipeline = pipeline.add_filter(GradeFilter::new(grade.as_str()));
        }
        if let Some(clearance) = selection.clearance.value() {
            pipeline = pipeline.add_filter(ClearanceFilter::new(clearance.clone()));
        }
        if let Some(role) = selection.role.value() {
            pipeline = pipeline.add_filter(RoleFilter::new(role.as_str()));
        }
        if let Some(minimum) = selection.availability.value() {
            pipeline = pipeline.add_filter(AvailabilityFilter::new(*minimum));
        }
        if let Some(skill) = selection.skills.value() {
            pipeline = pipeline.add_filter(SkillsFilter::new(skill));
        }
        pipeline
    }

    /// Add a filter to the pipeline (builder pattern).
    pub fn add_filter(mut self, filter: impl Filter + 'static) -> Self {
        self.filters.push(Box::new(filter));
        self
    }

    pub fn len(&self) -> usize {
        self.filters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    /// Names of the filters, in application order.
    pub fn filter_names(&self) -> Vec<&str> {
        self.filters.iter().map(|f| f.name()).collect()
    }

    /// Does a single candidate pass every filter?
    pub fn matches(&self, candidate: &CandidateSummary) -> bool {
        self.filters.iter().all(|f| f.matches(candidate))
    }

    /// Apply all filters in sequence to the candidates.
    ///
    /// ## Algorithm
    /// 1. Start with the input candidates
    /// 2. For each filter in order:
    ///    a. Log filter name and input count
    ///    b. Apply the filter
    ///    c. Log output count
    /// 3. Return final filtered set, in input order
    pub fn apply(&self, candidates: Vec<CandidateSummary>) -> Vec<CandidateSummary> {
        let mut current = candidates;
        for filter in &self.filters {
            tracing::debug!(
                "Applying filter: {} (input count: {})",
                filter.name(),
                current.len()
            );
            current = filter.apply(current);
            tracing::debug!(
                "Filter applied: {} (output count: {})",
                filter.name(),
                current.len()
            );
        }
        current
    }
}

impl Default for FilterPipeline {
    fn default() -> Self {
        Self::new()
    }
}
