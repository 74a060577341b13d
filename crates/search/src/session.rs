//! # Manual Search Session
//!
//! Holds everything one candidate search needs between user actions:
//! 1. The candidate list, fetched once
//! 2. The option lists derived from it
//! 3. The current filter selection
//! 4. The filtered view, rebuilt in full after every selection change
//!
//! A failed fetch is logged and recorded; the view stays as it was (empty
//! on first load) and no retry is attempted.

use std::fmt::Display;
use std::time::Instant;

use tracing::{debug, error, info};

use api_client::CandidateClient;
use candidates::{CandidateSummary, Clearance};
use pipeline::{
    Choice, FilterField, FilterOptions, FilterPipeline, FilterSelection, MinAvailability,
    SelectionError,
};

/// State of one manual candidate search.
#[derive(Debug, Clone)]
pub struct ManualSearch {
    candidates: Vec<CandidateSummary>,
    results: Vec<CandidateSummary>,
    options: FilterOptions,
    selection: FilterSelection,
    is_loading: bool,
    error: Option<String>,
}

impl ManualSearch {
    /// An empty search: no candidates, every filter "Any".
    pub fn new() -> Self {
        Self {
            candidates: Vec::new(),
            results: Vec::new(),
            options: FilterOptions::default(),
            selection: FilterSelection::new(),
            is_loading: false,
            error: None,
        }
    }

    /// Fetch the candidate list and rebuild options and results.
    pub async fn load(&mut self, client: &CandidateClient) {
        self.is_loading = true;
        let result = client.fetch_all_candidates().await;
        self.finish_load(result);
    }

    /// Complete a load with the outcome of the fetch.
    ///
    /// On success the list, options and results are replaced. On failure
    /// the error is logged and kept in `error()`; everything else is left
    /// unchanged.
    pub fn finish_load<E: Display>(&mut self, result: Result<Vec<CandidateSummary>, E>) {
        self.is_loading = false;
        match result {
            Ok(candidates) => {
                info!("Loaded {} candidates", candidates.len());
                self.error = None;
                self.install(candidates);
            }
            Err(e) => {
                error!("Failed to load candidates: {}", e);
                self.error = Some(e.to_string());
            }
        }
    }

    /// Use an already loaded list, e.g. from a snapshot file.
    pub fn load_from(&mut self, candidates: Vec<CandidateSummary>) {
        self.finish_load(Ok::<_, std::convert::Infallible>(candidates));
    }

    fn install(&mut self, candidates: Vec<CandidateSummary>) {
        let start = Instant::now();
        self.options = FilterOptions::derive(&candidates);
        self.candidates = candidates;
        debug!(
            "Derived options: {} locations, {} grades, {} roles, {} skills in {:.2?}",
            self.options.locations.len() - 1,
            self.options.grades.len() - 1,
            self.options.roles.len() - 1,
            self.options.skills.len() - 1,
            start.elapsed()
        );
        self.apply_filters();
    }

    /// Change one filter from its option label and rebuild the results.
    ///
    /// A rejected value leaves the selection and results untouched.
    pub fn update(&mut self, field: FilterField, value: &str) -> Result<(), SelectionError> {
        self.selection.set(field, value)?;
        debug!("Filter {} set to {}", field, value);
        self.apply_filters();
        Ok(())
    }

    pub fn set_location(&mut self, location: Choice<String>) {
        self.selection.location = location;
        self.apply_filters();
    }

    pub fn set_grade(&mut self, grade: Choice<String>) {
        self.selection.grade = grade;
        self.apply_filters();
    }

    pub fn set_clearance(&mut self, clearance: Choice<Clearance>) {
        self.selection.clearance = clearance;
        self.apply_filters();
    }

    pub fn set_availability(&mut self, availability: Choice<MinAvailability>) {
        self.selection.availability = availability;
        self.apply_filters();
    }

    pub fn set_role(&mut self, role: Choice<String>) {
        self.selection.role = role;
        self.apply_filters();
    }

    pub fn set_skills(&mut self, skills: Choice<String>) {
        self.selection.skills = skills;
        self.apply_filters();
    }

    /// Put every filter back to "Any".
    pub fn reset_filters(&mut self) {
        self.selection = FilterSelection::new();
        self.apply_filters();
    }

    /// Rebuild the results from the full list and the current selection.
    pub fn apply_filters(&mut self) {
        let pipeline = FilterPipeline::from_selection(&self.selection);
        self.results = pipeline.apply(self.candidates.clone());
        debug!(
            "{} of {} candidates match ({} active filters)",
            self.results.len(),
            self.candidates.len(),
            pipeline.len()
        );
    }

    pub fn candidates(&self) -> &[CandidateSummary] {
        &self.candidates
    }

    /// The filtered view.
    pub fn results(&self) -> &[CandidateSummary] {
        &self.results
    }

    pub fn options(&self) -> &FilterOptions {
        &self.options
    }

    pub fn selection(&self) -> &FilterSelection {
        &self.selection
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    /// Message of the last failed load, cleared by a successful one.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}

impl Default for ManualSearch {
    fn default() -> Self {
        Self::new()
    }
}
