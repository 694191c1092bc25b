//! Record model for the transfer-market engine
//!
//! `TransferRecord` is the entity the ordering/search engine operates on.
//! Field values arrive pre-validated from the input layer; the engine never
//! checks or clamps them.

use serde::{Deserialize, Serialize};

/// One player's transfer-market attributes.
///
/// Records are immutable-shape values: the engine rearranges whole records
/// inside a caller-owned collection and never mutates individual fields.
/// Duplicate `player_id`s are tolerated structurally; uniqueness is the
/// input layer's responsibility.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransferRecord {
    /// Unique positive identifier (uniqueness enforced upstream)
    pub player_id: u32,
    /// Player name (non-empty; alphabetic, space, apostrophe, hyphen)
    pub name: String,
    /// Categorical position label (e.g. "ST", "AMC")
    pub position: String,
    /// Nationality label (non-empty)
    pub nationality: String,
    /// Age in years (10-40)
    pub age: u8,
    /// Estimated market value, 0 to 1,000,000,000
    pub market_value: f64,
    /// Remaining contract duration in months (1-96)
    pub contract_months: u8,
    /// Goals + assists (0-1500)
    pub goal_contribution: u16,
}

impl TransferRecord {
    /// Build a record from already-validated field values.
    pub fn new(
        player_id: u32,
        name: impl Into<String>,
        position: impl Into<String>,
        nationality: impl Into<String>,
        age: u8,
        market_value: f64,
        contract_months: u8,
        goal_contribution: u16,
    ) -> Self {
        Self {
            player_id,
            name: name.into(),
            position: position.into(),
            nationality: nationality.into(),
            age,
            market_value,
            contract_months,
            goal_contribution,
        }
    }
}

/// Key field a roster can be sorted by.
///
/// Each field is coupled to one algorithm. The coupling is part of the
/// engine's behavioral contract: complexity, stability and in-place vs
/// value-returning semantics all differ per field (see `engine::roster`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortField {
    /// Ascending by age - stable merge sort, returns a new roster
    Age,
    /// Ascending by name - in-place selection sort, not stable
    Name,
    /// Ascending by nationality - in-place selection sort, not stable
    Nationality,
    /// Ascending by goal contribution - in-place insertion sort, stable
    GoalContribution,
}

impl SortField {
    /// Get all sort fields in order
    pub fn all() -> &'static [SortField] {
        &[
            SortField::Age,
            SortField::Name,
            SortField::Nationality,
            SortField::GoalContribution,
        ]
    }

    /// Get field name as string
    pub fn name(&self) -> &'static str {
        match self {
            SortField::Age => "age",
            SortField::Name => "name",
            SortField::Nationality => "nationality",
            SortField::GoalContribution => "goals",
        }
    }

    /// Label of the algorithm the field is coupled to
    pub fn algorithm(&self) -> &'static str {
        match self {
            SortField::Age => "merge",
            SortField::Name | SortField::Nationality => "selection",
            SortField::GoalContribution => "insertion",
        }
    }

    /// Parse from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "age" => Some(SortField::Age),
            "name" => Some(SortField::Name),
            "nationality" => Some(SortField::Nationality),
            "goals" | "goal_contribution" => Some(SortField::GoalContribution),
            _ => None,
        }
    }
}

/// Key field a sorted roster can be binary-searched by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SearchField {
    Name,
    Nationality,
}

impl SearchField {
    /// Get all search fields in order
    pub fn all() -> &'static [SearchField] {
        &[SearchField::Name, SearchField::Nationality]
    }

    /// Get field name as string
    pub fn name(&self) -> &'static str {
        match self {
            SearchField::Name => "name",
            SearchField::Nationality => "nationality",
        }
    }

    /// Parse from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "name" => Some(SearchField::Name),
            "nationality" => Some(SearchField::Nationality),
            _ => None,
        }
    }
}
