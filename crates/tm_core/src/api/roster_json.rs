//! JSON API for roster operations
//!
//! This module provides the JSON-based endpoints the form/controller layer
//! integrates against: sort a supplied roster by a key field, or
//! binary-search a pre-sorted roster for a name or nationality. Requests
//! carry the roster; the engine owns nothing between calls.

use serde::{Deserialize, Serialize};
use tracing::{debug, error, info};

use crate::engine::{search_by_name, search_by_nationality, sort_records};
use crate::error::{CoreError, Result};
use crate::models::{SearchField, SortField, TransferRecord};
use crate::SCHEMA_VERSION;

/// Roster sort request
#[derive(Debug, Deserialize)]
pub struct SortRequest {
    pub schema_version: u8,
    /// Key field: "age" | "name" | "nationality" | "goals"
    pub field: String,
    pub records: Vec<TransferRecord>,
}

/// Roster sort response
#[derive(Debug, Serialize)]
pub struct SortResponse {
    pub schema_version: u8,
    pub field: String,
    /// Algorithm the field is coupled to: "merge" | "selection" | "insertion"
    pub algorithm: String,
    pub records: Vec<TransferRecord>,
}

/// Roster search request
///
/// `records` must already be sorted ascending by `field` under
/// case-insensitive comparison (see `engine::roster`); the API validates
/// request shape, never record contents or order.
#[derive(Debug, Deserialize)]
pub struct SearchRequest {
    pub schema_version: u8,
    /// Key field: "name" | "nationality"
    pub field: String,
    pub target: String,
    pub records: Vec<TransferRecord>,
}

/// Roster search response
#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub schema_version: u8,
    pub field: String,
    pub target: String,
    pub found: bool,
    /// Matching index into the supplied roster; null when not found
    pub index: Option<usize>,
}

/// Sort the roster in a JSON request by its key field.
///
/// Returns the reordered roster together with the algorithm label, so the
/// form layer can surface which contract (stability, in-place) applied.
pub fn sort_roster_json(request_json: &str) -> Result<String> {
    debug!("Processing roster sort request");

    let request: SortRequest = match serde_json::from_str(request_json) {
        Ok(request) => request,
        Err(e) => {
            error!("Failed to parse SortRequest: {}", e);
            return Err(e.into());
        }
    };

    check_schema_version(request.schema_version)?;
    let field = parse_sort_field(&request.field)?;

    let mut records = request.records;
    sort_records(field, &mut records);

    info!(
        "Sorted {} records by {} ({} sort)",
        records.len(),
        field.name(),
        field.algorithm()
    );

    let response = SortResponse {
        schema_version: SCHEMA_VERSION,
        field: field.name().to_string(),
        algorithm: field.algorithm().to_string(),
        records,
    };

    Ok(serde_json::to_string(&response)?)
}

/// Binary-search the pre-sorted roster in a JSON request.
///
/// A missing target is a normal outcome (`found: false`), not an error.
pub fn search_roster_json(request_json: &str) -> Result<String> {
    debug!("Processing roster search request");

    let request: SearchRequest = match serde_json::from_str(request_json) {
        Ok(request) => request,
        Err(e) => {
            error!("Failed to parse SearchRequest: {}", e);
            return Err(e.into());
        }
    };

    check_schema_version(request.schema_version)?;
    let field = parse_search_field(&request.field)?;

    let index = match field {
        SearchField::Name => search_by_name(&request.records, &request.target),
        SearchField::Nationality => search_by_nationality(&request.records, &request.target),
    };

    match index {
        Some(i) => info!("Found '{}' by {} at index {}", request.target, field.name(), i),
        None => info!("No record with {} '{}'", field.name(), request.target),
    }

    let response = SearchResponse {
        schema_version: SCHEMA_VERSION,
        field: field.name().to_string(),
        target: request.target,
        found: index.is_some(),
        index,
    };

    Ok(serde_json::to_string(&response)?)
}

fn check_schema_version(version: u8) -> Result<()> {
    if version != SCHEMA_VERSION {
        return Err(CoreError::InvalidParameter(format!(
            "unsupported schema version: expected {}, got {}",
            SCHEMA_VERSION, version
        )));
    }
    Ok(())
}

fn parse_sort_field(raw: &str) -> Result<SortField> {
    SortField::from_str(raw)
        .ok_or_else(|| CoreError::InvalidParameter(format!("unknown sort field: {}", raw)))
}

fn parse_search_field(raw: &str) -> Result<SearchField> {
    SearchField::from_str(raw)
        .ok_or_else(|| CoreError::InvalidParameter(format!("unknown search field: {}", raw)))
}
