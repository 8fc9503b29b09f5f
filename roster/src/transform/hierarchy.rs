//! Render the department → team hierarchy.

use crate::models::DepartmentHierarchy;

/// Departments in ascending order, each with its teams in ascending order.
pub fn sorted_departments(hierarchy: &DepartmentHierarchy) -> Vec<(&str, Vec<&str>)> {
    // BTreeMap/BTreeSet iterate in key order
    hierarchy
        .iter()
        .map(|(dep, teams)| (dep.as_str(), teams.iter().map(String::as_str).collect()))
        .collect()
}

/// One line per department, followed by one tab-indented line per team.
///
/// ```
/// use roster::models::DepartmentHierarchy;
/// use roster::transform::render_hierarchy;
///
/// let mut hierarchy = DepartmentHierarchy::new();
/// hierarchy.entry("IT".into()).or_default().insert("Backend".into());
/// hierarchy.entry("IT".into()).or_default().insert("Api".into());
///
/// assert_eq!(render_hierarchy(&hierarchy), "IT\n\tApi\n\tBackend");
/// ```
pub fn render_hierarchy(hierarchy: &DepartmentHierarchy) -> String {
    let mut lines = Vec::new();
    for (dep, teams) in sorted_departments(hierarchy) {
        lines.push(dep.to_string());
        lines.extend(teams.into_iter().map(|team| format!("\t{}", team)));
    }
    lines.join("\n")
}
