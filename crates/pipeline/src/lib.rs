//! Filtering of candidate lists.
//!
//! This crate provides:
//! - FilterSelection: the current value of the six search filters
//! - Filter trait and one implementation per filter field
//! - FilterPipeline for composing filters
//! - FilterOptions: the selectable values for each filter
//!
//! ## Architecture
//! Filtering is a pure function of (candidates, selection). Whenever the
//! selection changes, a pipeline is built from it and the full candidate
//! list is filtered again; nothing is updated incrementally.
//!
//! ## Example Usage
//! ```ignore
//! use pipeline::{FilterField, FilterOptions, FilterPipeline, FilterSelection};
//!
//! let options = FilterOptions::derive(&candidates);
//!
//! let mut selection = FilterSelection::new();
//! selection.set(FilterField::Location, "UK")?;
//! selection.set(FilterField::Availability, ">= 50%")?;
//!
//! let filtered = FilterPipeline::from_selection(&selection).apply(candidates.clone());
//! ```

pub mod traits;
pub mod filters;
pub mod filter_pipeline;
pub mod options;
pub mod selection;

// Re-export main types
pub use traits::Filter;
pub use filter_pipeline::FilterPipeline;
pub use options::{FilterOptions, locale_cmp};
pub use selection::{ANY, Choice, FilterField, FilterSelection, MinAvailability, SelectionError};

use candidates::CandidateSummary;

/// Filter `candidates` by `selection`, keeping their order.
pub fn apply_selection(
    candidates: &[CandidateSummary],
    selection: &FilterSelection,
) -> Vec<CandidateSummary> {
    FilterPipeline::from_selection(selection).apply(candidates.to_vec())
}
