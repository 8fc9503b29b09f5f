//! High-level pipeline API: load a roster, then run one of the three actions.
//!
//! # Example
//!
//! ```rust,no_run
//! use roster::config::RosterConfig;
//! use roster::transform::pipeline::{run_action, Action};
//!
//! let config = RosterConfig::default();
//! let output = run_action(Action::Stats, &config).unwrap();
//! println!("{}", output);
//! ```

use std::path::PathBuf;

use crate::config::RosterConfig;
use crate::error::{PipelineResult, StatsResult};
use crate::logs::{log_info, log_success, log_warning};
use crate::models::{DepartmentStats, Record};
use crate::parser::{read_roster_file, ParsedRoster, ROSTER_COLUMNS};
use crate::report::{render_stats_text, write_stats_csv};

use super::grouper::{group_salaries, group_teams};
use super::hierarchy::render_hierarchy;
use super::stats::finalize_stats;

/// The three things a user can ask for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Print departments and their teams
    Hierarchy,
    /// Print per-department salary statistics
    Stats,
    /// Write per-department salary statistics to the export file
    Export,
}

impl Action {
    /// All actions, in menu order.
    pub const ALL: [Action; 3] = [Action::Hierarchy, Action::Stats, Action::Export];

    /// Menu label.
    pub fn description(&self) -> &'static str {
        match self {
            Action::Hierarchy => "Get all departments and teams",
            Action::Stats => "Get stats on departments with count of employees and salary",
            Action::Export => "Write stats on departments to csv file",
        }
    }
}

/// Read and parse the configured roster file.
pub fn load_roster(config: &RosterConfig) -> PipelineResult<ParsedRoster> {
    log_info(format!("Reading roster: {}", config.input_path.display()));
    let roster = read_roster_file(&config.input_path, &ROSTER_COLUMNS, config.delimiter)?;

    log_success(format!("Detected encoding: {}", roster.encoding));
    log_info(format!("Columns: {}", roster.headers.join(", ")));
    log_success(format!("Read {} rows", roster.records.len()));
    if roster.records.is_empty() {
        log_warning("Roster has no data rows");
    }

    Ok(roster)
}

/// Rendered department → team listing.
pub fn department_hierarchy(records: &[Record]) -> String {
    let hierarchy = group_teams(records);
    log_info(format!("{} departments", hierarchy.len()));
    render_hierarchy(&hierarchy)
}

/// Finalized statistics, ordered by department.
pub fn department_stats(records: &[Record]) -> StatsResult<Vec<DepartmentStats>> {
    let groups = group_salaries(records);
    log_info(format!("Aggregating {} departments", groups.len()));
    finalize_stats(&groups)
}

/// Compute statistics and write them to the configured export file.
pub fn export_stats(records: &[Record], config: &RosterConfig) -> PipelineResult<PathBuf> {
    let stats = department_stats(records)?;
    let path = write_stats_csv(&config.output_path, &stats, config.delimiter)?;
    log_success(format!("Wrote {} departments to {}", stats.len(), path.display()));
    Ok(path)
}

/// Run `action` over already-parsed records and return the text to show.
pub fn run_on_records(
    action: Action,
    records: &[Record],
    config: &RosterConfig,
) -> PipelineResult<String> {
    match action {
        Action::Hierarchy => Ok(department_hierarchy(records)),
        Action::Stats => Ok(render_stats_text(&department_stats(records)?)),
        Action::Export => {
            let path = export_stats(records, config)?;
            Ok(format!("Saved as {}", path.display()))
        }
    }
}

/// Load the roster and run `action`.
///
/// A malformed row aborts before anything is written.
pub fn run_action(action: Action, config: &RosterConfig) -> PipelineResult<String> {
    let roster = load_roster(config)?;
    run_on_records(action, &roster.records, config)
}
