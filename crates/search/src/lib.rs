//! Search crate for Smart Assign.
//!
//! This crate contains the manual search session that ties the candidate
//! client, the option lists and the filter pipeline together.

pub mod session;

pub use session::ManualSearch;
