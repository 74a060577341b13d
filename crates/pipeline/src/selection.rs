//! Filter selection state.
//!
//! Six independent fields, each either the sentinel "Any" or one concrete
//! value. A fresh `FilterSelection` has every field set to "Any".

use candidates::Clearance;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Label of the "no restriction" option, first in every option list.
pub const ANY: &str = "Any";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SelectionError {
    #[error("unknown filter field: {0}")]
    UnknownField(String),

    #[error("invalid clearance {0:?} (expected Any, SC, DV or NPPV2)")]
    InvalidClearance(String),

    #[error("invalid availability {0:?} (expected Any, >= 25%, >= 50% or >= 75%)")]
    InvalidAvailability(String),
}

/// Either no restriction, or a single required value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Choice<T> {
    Any,
    Only(T),
}

impl<T> Choice<T> {
    pub fn is_any(&self) -> bool {
        matches!(self, Choice::Any)
    }

    pub fn value(&self) -> Option<&T> {
        match self {
            Choice::Any => None,
            Choice::Only(value) => Some(value),
        }
    }
}

impl<T> Default for Choice<T> {
    fn default() -> Self {
        Choice::Any
    }
}

impl<T: fmt::Display> fmt::Display for Choice<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Choice::Any => f.write_str(ANY),
            Choice::Only(value) => write!(f, "{value}"),
        }
    }
}

impl Choice<String> {
    /// "Any" is the sentinel; every other string is taken verbatim.
    pub fn from_label(label: &str) -> Self {
        if label == ANY {
            Choice::Any
        } else {
            Choice::Only(label.to_string())
        }
    }
}

/// Minimum availability bucket. Thresholds are inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MinAvailability {
    Pct25,
    Pct50,
    Pct75,
}

impl MinAvailability {
    pub const ALL: [MinAvailability; 3] = [
        MinAvailability::Pct25,
        MinAvailability::Pct50,
        MinAvailability::Pct75,
    ];

    pub fn threshold(self) -> f32 {
        match self {
            MinAvailability::Pct25 => 25.0,
            MinAvailability::Pct50 => 50.0,
            MinAvailability::Pct75 => 75.0,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MinAvailability::Pct25 => ">= 25%",
            MinAvailability::Pct50 => ">= 50%",
            MinAvailability::Pct75 => ">= 75%",
        }
    }
}

impl fmt::Display for MinAvailability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for MinAvailability {
    type Err = SelectionError;

    /// Accepts `>= 25%`, `≥25%`, `25%` and `25`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let pct = s
            .trim()
            .trim_start_matches(">=")
            .trim_start_matches('≥')
            .trim()
            .trim_end_matches('%')
            .trim();
        match pct {
            "25" => Ok(MinAvailability::Pct25),
            "50" => Ok(MinAvailability::Pct50),
            "75" => Ok(MinAvailability::Pct75),
            _ => Err(SelectionError::InvalidAvailability(s.to_string())),
        }
    }
}

/// The six filterable fields, named as the UI names them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterField {
    Location,
    Grade,
    Clearance,
    Availability,
    Role,
    Skills,
}

impl FilterField {
    pub const ALL: [FilterField; 6] = [
        FilterField::Location,
        FilterField::Grade,
        FilterField::Clearance,
        FilterField::Availability,
        FilterField::Role,
        FilterField::Skills,
    ];

    pub fn name(self) -> &'static str {
        match self {
            FilterField::Location => "location",
            FilterField::Grade => "grade",
            FilterField::Clearance => "clearance",
            FilterField::Availability => "availability",
            FilterField::Role => "role",
            FilterField::Skills => "skills",
        }
    }
}

impl fmt::Display for FilterField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for FilterField {
    type Err = SelectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FilterField::ALL
            .into_iter()
            .find(|field| field.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| SelectionError::UnknownField(s.to_string()))
    }
}

/// Current value of every filter.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FilterSelection {
    /// Matched against `country`
    pub location: Choice<String>,
    /// Matched against `department`
    pub grade: Choice<String>,
    pub clearance: Choice<Clearance>,
    pub availability: Choice<MinAvailability>,
    /// Matched against `latest_cv_title`
    pub role: Choice<String>,
    /// Substring of the raw skills string, case-insensitive
    pub skills: Choice<String>,
}

impl FilterSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// True when every field is "Any".
    pub fn is_unrestricted(&self) -> bool {
        self.location.is_any()
            && self.grade.is_any()
            && self.clearance.is_any()
            && self.availability.is_any()
            && self.role.is_any()
            && self.skills.is_any()
    }

    /// Set one field from its textual option value.
    ///
    /// The selection is left unchanged when `value` is rejected.
    pub fn set(&mut self, field: FilterField, value: &str) -> Result<(), SelectionError> {
        match field {
            FilterField::Location => self.location = Choice::from_label(value),
            FilterField::Grade => self.grade = Choice::from_label(value),
            FilterField::Role => self.role = Choice::from_label(value),
            FilterField::Skills => self.skills = Choice::from_label(value),
            FilterField::Clearance => self.clearance = parse_clearance(value)?,
            FilterField::Availability => {
                self.availability = if value == ANY {
                    Choice::Any
                } else {
                    Choice::Only(value.parse()?)
                }
            }
        }
        Ok(())
    }

    /// Current value of one field as its option label.
    pub fn get(&self, field: FilterField) -> String {
        match field {
            FilterField::Location => self.location.to_string(),
            FilterField::Grade => self.grade.to_string(),
            FilterField::Clearance => self.clearance.to_string(),
            FilterField::Availability => self.availability.to_string(),
            FilterField::Role => self.role.to_string(),
            FilterField::Skills => self.skills.to_string(),
        }
    }
}

fn parse_clearance(value: &str) -> Result<Choice<Clearance>, SelectionError> {
    if value == ANY {
        return Ok(Choice::Any);
    }
    Clearance::FILTERABLE
        .into_iter()
        .find(|level| level.label() == value)
        .map(Choice::Only)
        .ok_or_else(|| SelectionError::InvalidClearance(value.to_string()))
}
