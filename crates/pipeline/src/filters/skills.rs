//! Filter on skills.
//!
//! Unlike the option list, which is built from individual skill tokens,
//! matching is a case-insensitive substring search over the whole raw
//! skills string. Selecting "SQL" therefore also keeps a candidate whose
//! skills read "PostgreSQL".

use crate::traits::Filter;
use candidates::CandidateSummary;

pub struct SkillsFilter {
    needle: String,
}

impl SkillsFilter {
    pub fn new(skill: &str) -> Self {
        Self {
            needle: skill.to_lowercase(),
        }
    }
}

impl Filter for SkillsFilter {
    fn name(&self) -> &str {
        "SkillsFilter"
    }

    fn matches(&self, candidate: &CandidateSummary) -> bool {
        candidate
            .skills
            .as_deref()
            .is_some_and(|skills| skills.to_lowercase().contains(&self.needle))
    }
}
