//! In-memory task planner core.
//!
//! Holds tasks and projects in an owned [`model::Store`], mutated through the
//! operations in [`ops`] and read through pure queries that hand a view layer
//! plain data: the incomplete/completed partition, per-project task lists,
//! date-grouped schedules, and a Sunday-first month grid.

pub mod model;
pub mod ops;
pub mod util;
