//! Filter on the title of the candidate's latest CV, shown as "role".

use crate::traits::Filter;
use candidates::CandidateSummary;

/// Keeps candidates whose latest CV title equals the selected role exactly.
pub struct RoleFilter {
    role: String,
}

impl RoleFilter {
    pub fn new(role: impl Into<String>) -> Self {
        Self { role: role.into() }
    }
}

impl Filter for RoleFilter {
    fn name(&self) -> &str {
        "RoleFilter"
    }

    fn matches(&self, candidate: &CandidateSummary) -> bool {
        candidate.latest_cv_title.as_deref() == Some(self.role.as_str())
    }
}
