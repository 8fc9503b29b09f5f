//! Aggregation module.
//!
//! - Grouper: records to per-department accumulators and team sets
//! - Stats: accumulators to finalized salary statistics
//! - Hierarchy: team sets to the sorted department listing
//! - Pipeline: load a roster and run an action

pub mod grouper;
pub mod hierarchy;
pub mod pipeline;
pub mod stats;

pub use grouper::{group_by, group_salaries, group_teams};
pub use hierarchy::{render_hierarchy, sorted_departments};
pub use pipeline::*;
pub use stats::{finalize_department, finalize_stats, round_to_cents};
