//! Reading and writing candidate snapshot files.
//!
//! A snapshot is a JSON array of candidate objects. It can be a saved API
//! response or a raw export of the profile view; both go through
//! `normalize_record`, so either form loads into the same
//! `CandidateSummary` values.

use crate::error::{DataLoadError, Result};
use crate::normalize::normalize_record;
use crate::types::CandidateSummary;
use rayon::prelude::*;
use serde_json::Value;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use tracing::{debug, info};

/// Parse a JSON document holding an array of candidate records.
pub fn parse_candidates(json: &str) -> Result<Vec<CandidateSummary>> {
    let records: Vec<Value> = match serde_json::from_str::<Value>(json)? {
        Value::Array(records) => records,
        other => {
            return Err(DataLoadError::InvalidValue {
                field: "document".to_string(),
                value: format!("expected a JSON array, found {}", kind_of(&other)),
            });
        }
    };

    normalize_records(&records)
}

/// Normalize already-decoded records, e.g. the body of an API response.
///
/// Records are normalized in parallel; the output keeps input order.
pub fn normalize_records(records: &[Value]) -> Result<Vec<CandidateSummary>> {
    let candidates = records
        .par_iter()
        .enumerate()
        .map(|(idx, record)| match record {
            Value::Object(row) => normalize_record(idx, row),
            other => Err(DataLoadError::ParseError {
                record: idx,
                reason: format!("expected an object, found {}", kind_of(other)),
            }),
        })
        .collect::<Result<Vec<_>>>()?;

    debug!("Parsed {} candidate records", candidates.len());
    Ok(candidates)
}

/// Load a snapshot file from disk.
pub fn load_from_file(path: &Path) -> Result<Vec<CandidateSummary>> {
    let content = fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => DataLoadError::FileNotFound {
            path: path.display().to_string(),
        },
        _ => DataLoadError::IoError(e),
    })?;

    let candidates = parse_candidates(&content)?;
    info!("Loaded {} candidates from {}", candidates.len(), path.display());
    Ok(candidates)
}

/// Write candidates to `path` as a pretty-printed JSON array in API shape.
pub fn write_snapshot(path: &Path, candidates: &[CandidateSummary]) -> Result<()> {
    let json = serde_json::to_string_pretty(candidates)?;
    fs::write(path, json)?;
    info!("Wrote {} candidates to {}", candidates.len(), path.display());
    Ok(())
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
