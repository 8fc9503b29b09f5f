//! Group roster records by department.
//!
//! Both the salary aggregate and the team hierarchy are the same fold:
//! pick a key per record, look up (or create) its accumulator, fold the
//! record in.
//!
//! ```text
//! Records                          →  Grouped
//! ┌──────────────────────────┐       ┌──────────────────────────────┐
//! │ IT, Backend, 1000        │       │ IT: count 2, [1000, 3000]    │
//! │ IT, Frontend, 3000       │  →    │     teams {Backend, Frontend}│
//! │ Sales, North, 2000       │       ├──────────────────────────────┤
//! └──────────────────────────┘       │ Sales: count 1, [2000]       │
//!                                    └──────────────────────────────┘
//! ```

use std::collections::{BTreeMap, BTreeSet};

use crate::models::{DepartmentAccumulator, DepartmentHierarchy, Record};

/// Group `items` by `key_fn`, folding each item into its group's accumulator.
///
/// Accumulators start from `A::default()` the first time a key is seen, so
/// a key with no items never appears. Items are folded in iteration order.
pub fn group_by<'a, T, K, A, KF, FF>(
    items: &'a [T],
    key_fn: KF,
    mut fold_fn: FF,
) -> BTreeMap<K, A>
where
    K: Ord,
    A: Default,
    KF: Fn(&'a T) -> K,
    FF: FnMut(&mut A, &'a T),
{
    let mut groups: BTreeMap<K, A> = BTreeMap::new();

    for item in items {
        let acc = groups.entry(key_fn(item)).or_default();
        fold_fn(acc, item);
    }

    groups
}

/// Employee count and salaries per department.
pub fn group_salaries(records: &[Record]) -> BTreeMap<String, DepartmentAccumulator> {
    group_by(
        records,
        |r| r.department.clone(),
        |acc: &mut DepartmentAccumulator, r| acc.push(r.salary),
    )
}

/// Distinct teams per department.
pub fn group_teams(records: &[Record]) -> DepartmentHierarchy {
    group_by(
        records,
        |r| r.department.clone(),
        |teams: &mut BTreeSet<String>, r| {
            teams.insert(r.team.clone());
        },
    )
}
