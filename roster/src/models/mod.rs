//! Domain models for the roster aggregation pipeline.
//!
//! - [`Record`] - One parsed roster row (department, team, salary)
//! - [`DepartmentAccumulator`] - In-progress aggregate for one department
//! - [`DepartmentStats`] - Finalized per-department salary summary
//! - [`DepartmentHierarchy`] - Department name to its distinct team names

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

// =============================================================================
// Record
// =============================================================================

/// One row of the roster, reduced to the columns the pipeline needs.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    pub department: String,
    pub team: String,
    /// Finite and non-negative; enforced by the parser.
    pub salary: f64,
}

impl Record {
    pub fn new(department: impl Into<String>, team: impl Into<String>, salary: f64) -> Self {
        Self {
            department: department.into(),
            team: team.into(),
            salary,
        }
    }
}

// =============================================================================
// Accumulator
// =============================================================================

/// Raw salary aggregate for one department.
///
/// Salaries are kept in input order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DepartmentAccumulator {
    pub employee_count: usize,
    pub salaries: Vec<f64>,
}

impl DepartmentAccumulator {
    /// Fold one employee's salary into the aggregate.
    pub fn push(&mut self, salary: f64) {
        self.employee_count += 1;
        self.salaries.push(salary);
    }
}

// =============================================================================
// Finalized statistics
// =============================================================================

/// Finalized salary summary of a department.
///
/// Field names serialize to the export header
/// `dep_name;employee_cnt;min_salary;max_salary;mean_salary`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DepartmentStats {
    #[serde(rename = "dep_name")]
    pub department: String,
    #[serde(rename = "employee_cnt")]
    pub employee_count: usize,
    pub min_salary: f64,
    pub max_salary: f64,
    /// Arithmetic mean rounded to cents.
    pub mean_salary: f64,
}

/// Column names of the statistics export, in output order.
pub const STATS_HEADERS: [&str; 5] = [
    "dep_name",
    "employee_cnt",
    "min_salary",
    "max_salary",
    "mean_salary",
];

// =============================================================================
// Hierarchy
// =============================================================================

/// Department name to the set of teams seen for it.
pub type DepartmentHierarchy = BTreeMap<String, BTreeSet<String>>;
