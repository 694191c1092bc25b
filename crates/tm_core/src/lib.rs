//! # tm_core - Transfer-Market Record Ordering & Search Engine
//!
//! This library provides the in-memory ordering and search core for the
//! transfer-market application, with a JSON API for easy integration with
//! form/UI front ends.
//!
//! ## Features
//! - Field-coupled sorting contracts (age → merge, name/nationality →
//!   selection, goal contribution → insertion)
//! - Comparator-parameterized algorithm primitives reusable over any element
//!   type
//! - Binary search over pre-sorted rosters with a documented sortedness
//!   precondition
//! - JSON API for easy integration

// Inherent from_str on key-field enums mirrors their name()/all() accessors
#![allow(clippy::should_implement_trait)]
// Record constructor takes one argument per field
#![allow(clippy::too_many_arguments)]
// Index loops are the point in the O(n²) sorts
#![allow(clippy::needless_range_loop)]

pub mod api;
pub mod engine;
pub mod error;
pub mod models;

// Re-export main API functions
pub use api::{
    search_roster_json, sort_roster_json, SearchRequest, SearchResponse, SortRequest, SortResponse,
};
pub use error::{CoreError, Result};

// Re-export engine operations
pub use engine::{
    binary_search_by, insertion_sort, merge_sort, ordinal_ignore_case, search_by_name,
    search_by_nationality, selection_sort, sort_by_age, sort_by_goal_contribution, sort_by_name,
    sort_by_nationality, sort_records,
};

// Re-export record model types
pub use models::{SearchField, SortField, TransferRecord};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const SCHEMA_VERSION: u8 = 1;
