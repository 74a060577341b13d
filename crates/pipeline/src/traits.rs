//! Core traits for the filtering pipeline.
//!
//! This module defines the Filter trait that allows composable,
//! independent predicates to be applied to a candidate list.

use candidates::CandidateSummary;

/// Core trait for filtering candidates.
///
/// All filters must implement this trait to be used in the FilterPipeline.
///
/// ## Design Note
/// - `Send + Sync` allows a built pipeline to be shared between threads
/// - A filter is a pure predicate; it holds the value it was built with
///   and never looks at other candidates
/// - `apply` takes ownership of the Vec and returns the survivors in their
///   original order
pub trait Filter: Send + Sync {
    /// Returns the name of this filter (for logging/debugging)
    fn name(&self) -> &str;

    /// Does this candidate pass?
    fn matches(&self, candidate: &CandidateSummary) -> bool;

    /// Keep only the candidates that pass.
    fn apply(&self, candidates: Vec<CandidateSummary>) -> Vec<CandidateSummary> {
        candidates
            .into_iter()
            .filter(|candidate| self.matches(candidate))
            .collect()
    }
}
