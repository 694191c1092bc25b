//! Ordering and search engine
//!
//! Three comparator-parameterized sort primitives and a bounded binary
//! search, plus the roster facade that couples each record field to its
//! algorithm. The primitives are deliberately kept distinct rather than
//! delegating to `slice::sort_by`: each one carries its own complexity and
//! stability contract, and callers pick a field knowing which contract they
//! get.

pub mod ordering;
pub mod roster;
pub mod search;

#[cfg(test)]
mod prop_tests;

pub use ordering::{insertion_sort, merge_sort, selection_sort};
pub use roster::{
    ordinal_ignore_case, search_by_name, search_by_nationality, sort_by_age,
    sort_by_goal_contribution, sort_by_name, sort_by_nationality, sort_records,
};
pub use search::binary_search_by;
