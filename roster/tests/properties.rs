//! Property tests for the aggregation and rendering functions
//!
//! These hold for every well-formed roster:
//! - Hierarchy: departments and teams are ascending and deduplicated
//! - Stats: min <= mean <= max, count matches the department's records
//! - Determinism: rendering twice gives the same text and CSV
//! - Round-trip: an exported report reads back to the same statistics

use proptest::prelude::*;
use roster::transform::sorted_departments;
use roster::{
    department_stats, group_teams, parse_records, parse_stats_csv, render_stats_csv,
    render_stats_text, Record, ROSTER_COLUMNS,
};
use std::collections::BTreeSet;

// Names never contain the delimiter, line breaks or surrounding whitespace.
fn name() -> impl Strategy<Value = String> {
    "[A-Za-z&][A-Za-z0-9&_-]{0,8}"
}

fn record() -> impl Strategy<Value = Record> {
    (name(), name(), 0.0f64..1_000_000.0)
        .prop_map(|(department, team, salary)| Record::new(department, team, salary))
}

fn records() -> impl Strategy<Value = Vec<Record>> {
    prop::collection::vec(record(), 0..40)
}

fn roster_text(records: &[Record]) -> String {
    let mut text = String::from("name;dep;team;pos;grade;salary\n");
    for (i, r) in records.iter().enumerate() {
        text.push_str(&format!("e{};{};{};dev;1;{}\n", i, r.department, r.team, r.salary));
    }
    text
}

mod hierarchy {
    use super::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Property: departments and teams come out strictly ascending
        #[test]
        fn prop_hierarchy_is_sorted_and_deduplicated(records in records()) {
            let hierarchy = group_teams(&records);
            let listing = sorted_departments(&hierarchy);

            for pair in listing.windows(2) {
                prop_assert!(pair[0].0 < pair[1].0);
            }
            for (_, teams) in &listing {
                for pair in teams.windows(2) {
                    prop_assert!(pair[0] < pair[1]);
                }
            }
        }

        /// Property: every department with a record is listed, and nothing else
        #[test]
        fn prop_hierarchy_covers_all_departments(records in records()) {
            let hierarchy = group_teams(&records);

            let listed: BTreeSet<&str> = hierarchy.keys().map(String::as_str).collect();
            let expected: BTreeSet<&str> =
                records.iter().map(|r| r.department.as_str()).collect();
            prop_assert_eq!(listed, expected);

            for r in &records {
                prop_assert!(hierarchy[&r.department].contains(&r.team));
            }
        }
    }
}

mod stats {
    use super::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Property: mean lies within [min, max] and counts match the records
        #[test]
        fn prop_stats_are_bounded_and_counted(records in records()) {
            let stats = department_stats(&records).unwrap();

            let departments: BTreeSet<&str> =
                records.iter().map(|r| r.department.as_str()).collect();
            prop_assert_eq!(stats.len(), departments.len());

            for s in &stats {
                let expected = records.iter().filter(|r| r.department == s.department).count();
                prop_assert_eq!(s.employee_count, expected);
                prop_assert!(s.min_salary <= s.mean_salary);
                prop_assert!(s.mean_salary <= s.max_salary);
            }
        }

        /// Property: the same records always render to the same reports
        #[test]
        fn prop_rendering_is_deterministic(records in records()) {
            let first = department_stats(&records).unwrap();
            let second = department_stats(&records).unwrap();

            prop_assert_eq!(render_stats_text(&first), render_stats_text(&second));
            prop_assert_eq!(
                render_stats_csv(&first, ';').unwrap(),
                render_stats_csv(&second, ';').unwrap()
            );
        }

        /// Property: an exported report reads back unchanged
        #[test]
        fn prop_csv_round_trip(records in records()) {
            let stats = department_stats(&records).unwrap();
            let csv = render_stats_csv(&stats, ';').unwrap();

            prop_assert_eq!(parse_stats_csv(&csv, ';').unwrap(), stats);
        }
    }
}

mod parsing {
    use super::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(50))]

        /// Property: a roster written from records parses back to them
        #[test]
        fn prop_roster_text_parses_back(records in records()) {
            let parsed = parse_records(&roster_text(&records), &ROSTER_COLUMNS, ';').unwrap();
            prop_assert_eq!(parsed, records);
        }
    }
}
