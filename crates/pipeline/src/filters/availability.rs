//! Filter on minimum availability.

use crate::selection::MinAvailability;
use crate::traits::Filter;
use candidates::CandidateSummary;

/// Keeps candidates whose availability is at least the bucket threshold.
///
/// ## Algorithm
/// `availability >= threshold`, so a candidate at exactly 50% passes the
/// ">= 50%" bucket.
pub struct AvailabilityFilter {
    minimum: MinAvailability,
}

impl AvailabilityFilter {
    pub fn new(minimum: MinAvailability) -> Self {
        Self { minimum }
    }
}

impl Filter for AvailabilityFilter {
    fn name(&self) -> &str {
        "AvailabilityFilter"
    }

    fn matches(&self, candidate: &CandidateSummary) -> bool {
        candidate.availability >= self.minimum.threshold()
    }
}
