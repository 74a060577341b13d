//! Filter implementations for the candidate pipeline.
//!
//! One filter per selection field. Each is constructed with a concrete
//! value; an "Any" selection simply means the filter is not added.

pub mod availability;
pub mod clearance;
pub mod grade;
pub mod location;
pub mod role;
pub mod skills;

// Re-export for convenience
pub use availability::AvailabilityFilter;
pub use clearance::ClearanceFilter;
pub use grade::GradeFilter;
pub use location::LocationFilter;
pub use role::RoleFilter;
pub use skills::SkillsFilter;
