//! # Roster Operations
//!
//! Field-specific facade over the sort/search primitives. Each record field
//! is coupled to one algorithm, and each operation documents whether it
//! returns a new roster or reorders the caller's in place - callers never
//! have to guess:
//!
//! - `sort_by_age` - merge sort, returns a new `Vec` (stable)
//! - `sort_by_name` / `sort_by_nationality` - selection sort, in place
//! - `sort_by_goal_contribution` - insertion sort, in place (stable)
//! - `search_by_name` / `search_by_nationality` - binary search over a
//!   roster already sorted by that field
//!
//! Text sorts compare case-sensitively (ordinal); the searches compare
//! case-insensitively. A roster whose keys mix case classes can therefore
//! satisfy the sort order but not the search precondition - callers that
//! feed searches should establish case-insensitive order, e.g. with
//! `selection_sort` over [`ordinal_ignore_case`].

use std::cmp::Ordering;

use tracing::debug;

use super::ordering::{insertion_sort, merge_sort, selection_sort};
use super::search::binary_search_by;
use crate::models::{SortField, TransferRecord};

/// Sort a roster ascending by age, returning a new roster.
///
/// Stable: players of equal age keep their input order.
pub fn sort_by_age(records: &[TransferRecord]) -> Vec<TransferRecord> {
    merge_sort(records, &|a, b| a.age.cmp(&b.age))
}

/// Sort a roster ascending by name, in place. Not stable.
pub fn sort_by_name(records: &mut [TransferRecord]) {
    selection_sort(records, |a, b| a.name.cmp(&b.name));
}

/// Sort a roster ascending by nationality, in place. Not stable.
pub fn sort_by_nationality(records: &mut [TransferRecord]) {
    selection_sort(records, |a, b| a.nationality.cmp(&b.nationality));
}

/// Sort a roster ascending by goal contribution, in place.
///
/// Stable: players with equal contributions keep their input order.
pub fn sort_by_goal_contribution(records: &mut [TransferRecord]) {
    insertion_sort(records, |a, b| a.goal_contribution.cmp(&b.goal_contribution));
}

/// Run the sort coupled to `field`, normalizing the in-place vs
/// value-returning split for dispatch-style callers: the age sort's merged
/// result replaces the vector's contents, the other sorts reorder in place.
pub fn sort_records(field: SortField, records: &mut Vec<TransferRecord>) {
    debug!("Sorting {} records by {} ({} sort)", records.len(), field.name(), field.algorithm());
    match field {
        SortField::Age => *records = sort_by_age(records),
        SortField::Name => sort_by_name(records),
        SortField::Nationality => sort_by_nationality(records),
        SortField::GoalContribution => sort_by_goal_contribution(records),
    }
}

/// Binary-search a roster for a player name, case-insensitively.
///
/// Precondition: `records` is sorted ascending by name under
/// case-insensitive ordinal comparison. This is not checked at runtime
/// (re-sorting would change the complexity contract); a violation cannot
/// crash or index out of bounds, but the result is unreliable. Debug builds
/// assert the precondition.
///
/// Over duplicate names any matching index may be returned.
pub fn search_by_name(records: &[TransferRecord], target: &str) -> Option<usize> {
    debug_assert!(
        is_sorted_ignore_case(records, |r| r.name.as_str()),
        "search_by_name requires a roster sorted by name"
    );
    binary_search_by(records, |r| ordinal_ignore_case(&r.name, target))
}

/// Binary-search a roster for a nationality, case-insensitively.
///
/// Same precondition and duplicate-key behavior as [`search_by_name`], with
/// nationality as the key field.
pub fn search_by_nationality(records: &[TransferRecord], target: &str) -> Option<usize> {
    debug_assert!(
        is_sorted_ignore_case(records, |r| r.nationality.as_str()),
        "search_by_nationality requires a roster sorted by nationality"
    );
    binary_search_by(records, |r| ordinal_ignore_case(&r.nationality, target))
}

/// Ordinal comparison over lowercased code points.
///
/// This is the comparison the searches probe with; sorting a roster with it
/// establishes their precondition exactly.
pub fn ordinal_ignore_case(a: &str, b: &str) -> Ordering {
    a.chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase))
}

fn is_sorted_ignore_case<'a, F>(records: &'a [TransferRecord], key: F) -> bool
where
    F: Fn(&'a TransferRecord) -> &'a str,
{
    records
        .windows(2)
        .all(|pair| ordinal_ignore_case(key(&pair[0]), key(&pair[1])) != Ordering::Greater)
}
