//! Filter on the candidate's country, shown as "location".

use crate::traits::Filter;
use candidates::CandidateSummary;

/// Keeps candidates whose country equals the selected location exactly.
pub struct LocationFilter {
    location: String,
}

impl LocationFilter {
    pub fn new(location: impl Into<String>) -> Self {
        Self {
            location: location.into(),
        }
    }
}

impl Filter for LocationFilter {
    fn name(&self) -> &str {
        "LocationFilter"
    }

    fn matches(&self, candidate: &CandidateSummary) -> bool {
        candidate.country.as_deref() == Some(self.location.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(id: u64, country: Option<&str>) -> CandidateSummary {
        let mut c = CandidateSummary::new(id);
        c.country = country.map(str::to_string);
        c
    }

    #[test]
    fn test_location_filter() {
        let candidates = vec![
            candidate(1, Some("UK")),
            candidate(2, Some("Ireland")),
            candidate(3, None),
            candidate(4, Some("uk")),
            candidate(5, Some("UK")),
        ];

        let filtered = LocationFilter::new("UK").apply(candidates);

        let ids: Vec<u64> = filtered.iter().map(|c| c.user_id).collect();
        assert_eq!(ids, vec![1, 5]);
    }
}
