//! # Candidates Crate
//!
//! Domain model for the candidate search tool, plus loading of candidate
//! snapshot files.
//!
//! ## Main Components
//!
//! - **types**: `CandidateSummary` and `Clearance`
//! - **normalize**: map loosely-named profile rows into `CandidateSummary`
//! - **parser**: read and write JSON snapshot files
//! - **error**: Error types for loading
//!
//! ## Example Usage
//!
//! ```ignore
//! use candidates::parser;
//! use std::path::Path;
//!
//! let candidates = parser::load_from_file(Path::new("data/candidates.json"))?;
//! for candidate in &candidates {
//!     println!("{} ({} skills)", candidate.display_name(), candidate.skill_tokens().count());
//! }
//! ```

// Public modules
pub mod error;
pub mod types;
pub mod normalize;
pub mod parser;

// Re-export commonly used types for convenience
pub use error::{DataLoadError, Result};
pub use parser::{load_from_file, normalize_records, parse_candidates, write_snapshot};
pub use types::{CandidateId, CandidateSummary, Clearance};
