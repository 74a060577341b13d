//! Normalization of loosely-shaped candidate rows.
//!
//! Exports from the profile view do not agree on column names: the name may
//! be `full_name`, `user_name` or `name`, skills may be a list or a
//! JSON-encoded string, availability may be a float or a string. This module
//! maps such a row into a `CandidateSummary`. API responses and snapshot
//! files both go through it. Records already in API shape pass through
//! unchanged, because the API's own field names are always the first key
//! tried; scalar values of the wrong type (a numeric grade, a boolean
//! clearance) are kept as their JSON text.

use crate::error::{DataLoadError, Result};
use crate::types::{CandidateSummary, Clearance};
use serde_json::{Map, Value};

const NAME_KEYS: &[&str] = &["full_name", "user_name", "name"];
const EMAIL_KEYS: &[&str] = &["email", "user_email"];
const COUNTRY_KEYS: &[&str] = &["country", "location", "city", "region"];
const TITLE_KEYS: &[&str] = &["latest_cv_title", "cv_title"];
const SKILLS_KEYS: &[&str] = &["skills", "key_qualifications", "technologies"];
const AVAILABILITY_KEYS: &[&str] = &[
    "avg_availability_30d",
    "availability",
    "latest_percent_available",
];
const CPD_KEYS: &[&str] = &["cpd_label", "cpd", "cpd_level"];
const SFIA_KEYS: &[&str] = &["sfia_level", "sfia"];
const DEPARTMENT_KEYS: &[&str] = &["department", "grade", "job_grade", "level"];
const CLEARANCE_KEYS: &[&str] = &["clearance", "sc_clearance", "security_clearance"];

/// First value among `keys` that is present and not `null`.
pub fn pick<'a>(row: &'a Map<String, Value>, keys: &[&str]) -> Option<&'a Value> {
    keys.iter()
        .filter_map(|key| row.get(*key))
        .find(|value| !value.is_null())
}

/// Normalize one row. `record` is its position, used in error messages.
pub fn normalize_record(record: usize, row: &Map<String, Value>) -> Result<CandidateSummary> {
    let user_id = match row.get("user_id") {
        Some(Value::Number(n)) => n.as_u64(),
        Some(Value::String(s)) => s.trim().parse().ok(),
        _ => None,
    }
    .ok_or_else(|| DataLoadError::ParseError {
        record,
        reason: format!(
            "user_id must be a non-negative integer, got {}",
            row.get("user_id").unwrap_or(&Value::Null)
        ),
    })?;

    let grade = format_grade_display(
        pick(row, CPD_KEYS).and_then(text),
        pick(row, SFIA_KEYS).and_then(text),
        pick(row, DEPARTMENT_KEYS).and_then(text),
    );

    Ok(CandidateSummary {
        user_id,
        full_name: pick(row, NAME_KEYS).and_then(text),
        email: pick(row, EMAIL_KEYS).and_then(text),
        department: grade,
        country: pick(row, COUNTRY_KEYS).and_then(text),
        latest_cv_title: pick(row, TITLE_KEYS).and_then(text),
        skills: pick(row, SKILLS_KEYS).and_then(format_skills),
        availability: parse_availability(pick(row, AVAILABILITY_KEYS)),
        clearance: pick(row, CLEARANCE_KEYS)
            .and_then(text)
            .filter(|label| !label.trim().is_empty())
            .map(Clearance::from),
    })
}

/// Render skills as a `", "`-joined string.
///
/// Accepts a JSON list, a string holding a JSON list (`"[\"Go\", \"Rust\"]"`),
/// or a plain string. A bracketed string that is not valid JSON has its
/// brackets and quotes stripped instead.
pub fn format_skills(raw: &Value) -> Option<String> {
    match raw {
        Value::Null => None,
        Value::Array(items) => Some(join_items(items)),
        Value::String(s) => {
            let val = s.trim();
            if val.starts_with('[') && val.ends_with(']') {
                match serde_json::from_str::<Vec<Value>>(val) {
                    Ok(items) => Some(join_items(&items)),
                    Err(_) => Some(
                        val.trim_matches(|c: char| c == '[' || c == ']')
                            .replace(['"', '\''], ""),
                    ),
                }
            } else {
                Some(val.to_string())
            }
        }
        other => text(other),
    }
}

/// Whole-number availability percentage. Anything unparseable is 0.
pub fn parse_availability(raw: Option<&Value>) -> f32 {
    let pct = match raw {
        Some(Value::Number(n)) => n.as_i64().or_else(|| n.as_f64().map(|f| f.trunc() as i64)),
        Some(Value::String(s)) => {
            let s = s.trim();
            s.parse::<i64>()
                .ok()
                .or_else(|| s.parse::<f64>().ok().filter(|f| f.is_finite()).map(|f| f.trunc() as i64))
        }
        Some(Value::Bool(b)) => Some(i64::from(*b)),
        _ => None,
    };
    pct.unwrap_or(0) as f32
}

/// Combine CPD level, SFIA level and department into the grade label.
pub fn format_grade_display(
    cpd: Option<String>,
    sfia: Option<String>,
    department: Option<String>,
) -> Option<String> {
    let cpd = cpd.filter(|s| !s.is_empty());
    let sfia = sfia.filter(|s| !s.is_empty());
    match (cpd, sfia) {
        (Some(cpd), Some(sfia)) => Some(format!("{cpd} / SFIA{sfia}")),
        (Some(cpd), None) => Some(cpd),
        (None, Some(sfia)) => Some(format!("SFIA{sfia}")),
        (None, None) => department,
    }
}

fn text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64() != Some(0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(fields) => !fields.is_empty(),
    }
}

fn join_items(items: &[Value]) -> String {
    items
        .iter()
        .filter(|item| is_truthy(item))
        .filter_map(text)
        .map(|s| s.trim().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
