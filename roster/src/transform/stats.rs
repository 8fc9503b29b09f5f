//! Finalize department accumulators into salary statistics.

use std::collections::BTreeMap;

use crate::error::{StatsError, StatsResult};
use crate::models::{DepartmentAccumulator, DepartmentStats};

/// Round to two decimal places, halves away from zero.
pub fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Reduce one department's accumulator to its statistics.
pub fn finalize_department(
    department: &str,
    acc: &DepartmentAccumulator,
) -> StatsResult<DepartmentStats> {
    if acc.salaries.is_empty() {
        return Err(StatsError::EmptyGroup {
            department: department.to_string(),
        });
    }
    if acc.employee_count != acc.salaries.len() {
        return Err(StatsError::CountMismatch {
            department: department.to_string(),
            count: acc.employee_count,
            salaries: acc.salaries.len(),
        });
    }

    let min_salary = acc.salaries.iter().copied().fold(f64::INFINITY, f64::min);
    let max_salary = acc.salaries.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let sum: f64 = acc.salaries.iter().sum();
    let mean = sum / acc.salaries.len() as f64;

    Ok(DepartmentStats {
        department: department.to_string(),
        employee_count: acc.employee_count,
        min_salary,
        max_salary,
        // Rounding may step outside the observed range for tightly grouped salaries.
        mean_salary: round_to_cents(mean).clamp(min_salary, max_salary),
    })
}

/// Finalize every department, ordered by department name.
pub fn finalize_stats(
    groups: &BTreeMap<String, DepartmentAccumulator>,
) -> StatsResult<Vec<DepartmentStats>> {
    groups
        .iter()
        .map(|(department, acc)| finalize_department(department, acc))
        .collect()
}
