//! Filter on security clearance.

use crate::traits::Filter;
use candidates::{CandidateSummary, Clearance};

/// Keeps candidates holding exactly the selected clearance.
///
/// Candidates without a clearance never pass, and holding a higher level
/// does not satisfy a lower one: DV does not match an SC selection.
pub struct ClearanceFilter {
    clearance: Clearance,
}

impl ClearanceFilter {
    pub fn new(clearance: Clearance) -> Self {
        Self { clearance }
    }
}

impl Filter for ClearanceFilter {
    fn name(&self) -> &str {
        "ClearanceFilter"
    }

    fn matches(&self, candidate: &CandidateSummary) -> bool {
        candidate.clearance.as_ref() == Some(&self.clearance)
    }
}
