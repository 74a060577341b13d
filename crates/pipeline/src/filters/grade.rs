//! Filter on the candidate's department, shown as "grade".

use crate::traits::Filter;
use candidates::CandidateSummary;

/// Keeps candidates whose department equals the selected grade exactly.
pub struct GradeFilter {
    grade: String,
}

impl GradeFilter {
    pub fn new(grade: impl Into<String>) -> Self {
        Self {
            grade: grade.into(),
        }
    }
}

impl Filter for GradeFilter {
    fn name(&self) -> &str {
        "GradeFilter"
    }

    fn matches(&self, candidate: &CandidateSummary) -> bool {
        candidate.department.as_deref() == Some(self.grade.as_str())
    }
}
