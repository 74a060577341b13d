//! Core domain types for candidate records.
//!
//! `CandidateSummary` mirrors the JSON objects returned by the
//! `/all-candidates` endpoint. The backend fills missing columns with
//! `null`, so every descriptive field is optional on the wire.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

// =============================================================================
// Type Aliases
// =============================================================================

/// Unique identifier for a candidate (the backend's `user_id`)
pub type CandidateId = u64;

// =============================================================================
// Clearance
// =============================================================================

/// Security clearance level held by a candidate.
///
/// Only SC, DV and NPPV2 can be filtered on. Any other label coming from
/// the backend is preserved in `Other` so it survives a snapshot round trip,
/// but it never equals one of the filterable levels.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Clearance {
    /// Security Check
    Sc,
    /// Developed Vetting
    Dv,
    /// Non-Police Personnel Vetting level 2
    Nppv2,
    Other(String),
}

impl Clearance {
    /// The levels offered as clearance filter options, in display order.
    pub const FILTERABLE: [Clearance; 3] = [Clearance::Sc, Clearance::Dv, Clearance::Nppv2];

    /// Map a wire label to a clearance. Unknown labels become `Other`.
    pub fn from_label(label: &str) -> Self {
        match label {
            "SC" => Clearance::Sc,
            "DV" => Clearance::Dv,
            "NPPV2" => Clearance::Nppv2,
            other => Clearance::Other(other.to_string()),
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Clearance::Sc => "SC",
            Clearance::Dv => "DV",
            Clearance::Nppv2 => "NPPV2",
            Clearance::Other(label) => label,
        }
    }
}

impl fmt::Display for Clearance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl From<String> for Clearance {
    fn from(label: String) -> Self {
        match Clearance::from_label(&label) {
            Clearance::Other(_) => Clearance::Other(label),
            known => known,
        }
    }
}

impl From<Clearance> for String {
    fn from(clearance: Clearance) -> Self {
        match clearance {
            Clearance::Other(label) => label,
            known => known.label().to_string(),
        }
    }
}

// =============================================================================
// CandidateSummary
// =============================================================================

/// One row of the candidate list.
///
/// Field names match the API payload. Extra keys in the payload (the backend
/// also sends `user_name`) are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateSummary {
    pub user_id: CandidateId,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    /// Shown as "grade"
    #[serde(default)]
    pub department: Option<String>,
    /// Shown as "location"
    #[serde(default)]
    pub country: Option<String>,
    /// Shown as "role"
    #[serde(default)]
    pub latest_cv_title: Option<String>,
    /// Comma-separated, e.g. `"Python, SQL, AWS"`
    #[serde(default)]
    pub skills: Option<String>,
    /// Percentage in 0..=100; `null` reads as 0
    #[serde(default, deserialize_with = "null_as_zero")]
    pub availability: f32,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub clearance: Option<Clearance>,
}

impl CandidateSummary {
    /// Create a candidate with only an id; every other field is absent.
    pub fn new(user_id: CandidateId) -> Self {
        Self {
            user_id,
            full_name: None,
            email: None,
            department: None,
            country: None,
            latest_cv_title: None,
            skills: None,
            availability: 0.0,
            clearance: None,
        }
    }

    /// Individual skills: split on commas, trimmed, empties dropped.
    pub fn skill_tokens(&self) -> impl Iterator<Item = &str> {
        self.skills
            .as_deref()
            .unwrap_or_default()
            .split(',')
            .map(str::trim)
            .filter(|token| !token.is_empty())
    }

    pub fn display_name(&self) -> &str {
        self.full_name.as_deref().unwrap_or("(unnamed)")
    }
}

fn null_as_zero<'de, D>(deserializer: D) -> Result<f32, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<f32>::deserialize(deserializer)?.unwrap_or(0.0))
}

fn empty_as_none<'de, D>(deserializer: D) -> Result<Option<Clearance>, D::Error>
where
    D: Deserializer<'de>,
{
    let label = Option::<String>::deserialize(deserializer)?;
    Ok(label
        .filter(|label| !label.trim().is_empty())
        .map(Clearance::from))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_api_record() {
        let json = r#"{
            "user_id": 123,
            "full_name": "Jane Doe",
            "user_name": "Jane Doe",
            "email": "jane@example.com",
            "department": "G6",
            "country": "UK",
            "latest_cv_title": "Data Engineer",
            "skills": "Python, SQL",
            "availability": 75,
            "clearance": "SC"
        }"#;

        let candidate: CandidateSummary = serde_json::from_str(json).unwrap();
        assert_eq!(candidate.user_id, 123);
        assert_eq!(candidate.full_name.as_deref(), Some("Jane Doe"));
        assert_eq!(candidate.department.as_deref(), Some("G6"));
        assert_eq!(candidate.availability, 75.0);
        assert_eq!(candidate.clearance, Some(Clearance::Sc));
    }

    #[test]
    fn test_nulls_and_missing_fields() {
        let json = r#"{"user_id": 7, "country": null, "availability": null, "clearance": ""}"#;

        let candidate: CandidateSummary = serde_json::from_str(json).unwrap();
        assert_eq!(candidate, CandidateSummary::new(7));
    }

    #[test]
    fn test_unknown_clearance_is_preserved() {
        let json = r#"{"user_id": 1, "clearance": "BPSS"}"#;

        let candidate: CandidateSummary = serde_json::from_str(json).unwrap();
        assert_eq!(candidate.clearance, Some(Clearance::Other("BPSS".to_string())));

        let back = serde_json::to_value(&candidate).unwrap();
        assert_eq!(back["clearance"], "BPSS");
    }

    #[test]
    fn test_skill_tokens() {
        let mut candidate = CandidateSummary::new(1);
        candidate.skills = Some(" Python, SQL,, ,AWS ".to_string());

        let tokens: Vec<&str> = candidate.skill_tokens().collect();
        assert_eq!(tokens, vec!["Python", "SQL", "AWS"]);

        assert_eq!(CandidateSummary::new(2).skill_tokens().count(), 0);
    }
}
