//! # Roster - department hierarchy and salary statistics
//!
//! Reads a semicolon-delimited employee roster and derives a sorted
//! department → team listing, per-department salary statistics, and a CSV
//! export of those statistics.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │ Roster CSV  │────▶│   Parser    │────▶│   Grouper   │────▶│  Hierarchy  │
//! │ (auto-enc)  │     │  (Record)   │     │ (by dept.)  │  ┌─▶│  / Stats    │
//! └─────────────┘     └─────────────┘     └─────────────┘  │  └──────┬──────┘
//!                                                          │         ▼
//!                                                          │  ┌─────────────┐
//!                                                          └──│   Report    │
//!                                                             │ text / CSV  │
//!                                                             └─────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use roster::{department_stats, parse_records, render_stats_text, ROSTER_COLUMNS};
//!
//! let content = "name;dep;team;pos;grade;salary\nAnn;IT;Api;Dev;3;1500\nBob;IT;Web;Dev;2;2500";
//! let records = parse_records(content, &ROSTER_COLUMNS, ';').unwrap();
//! let stats = department_stats(&records).unwrap();
//!
//! assert_eq!(stats[0].mean_salary, 2000.0);
//! println!("{}", render_stats_text(&stats));
//! ```
//!
//! ## Modules
//!
//! - [`error`] - Hierarchical error types
//! - [`models`] - Domain models (Record, DepartmentStats, ...)
//! - [`parser`] - Roster parsing with encoding auto-detection
//! - [`transform`] - Grouping, statistics, hierarchy, pipeline
//! - [`report`] - Text, CSV and JSON renderers
//! - [`config`] - Runtime configuration
//! - [`logs`] - Diagnostic logging
//! - [`menu`] - Interactive menu

// Core modules
pub mod error;
pub mod models;

// Parsing
pub mod parser;

// Aggregation
pub mod transform;

// Rendering
pub mod report;

// Runtime
pub mod config;
pub mod logs;
pub mod menu;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{
    ConfigError, ExportError, MenuError, ParseError, PipelineError, StatsError,
};

pub use models::{DepartmentAccumulator, DepartmentHierarchy, DepartmentStats, Record};

pub use parser::{
    parse_bytes, parse_record, parse_records, read_roster_file, ColumnLayout, ParsedRoster,
    DEFAULT_DELIMITER, ROSTER_COLUMNS,
};

pub use transform::{
    department_hierarchy, department_stats, export_stats, finalize_stats, group_by,
    group_salaries, group_teams, load_roster, render_hierarchy, run_action, run_on_records,
    Action,
};

pub use report::{
    parse_stats_csv, render_stats_csv, render_stats_json, render_stats_text, write_stats_csv,
};

pub use config::RosterConfig;
