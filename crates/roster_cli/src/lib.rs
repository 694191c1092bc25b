//! Roster CLI Library
//!
//! JSON roster file handling for the transfer-market engine tools: load a
//! roster into `TransferRecord`s, write one back out, and render a plain
//! text table for terminal output. The core engine stays I/O-free; every
//! file touch lives here.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use tm_core::TransferRecord;

/// Load a roster from a JSON array file.
pub fn load_roster(path: &Path) -> Result<Vec<TransferRecord>> {
    let json_str = fs::read_to_string(path)
        .with_context(|| format!("Failed to read roster file: {}", path.display()))?;

    let records: Vec<TransferRecord> = serde_json::from_str(&json_str)
        .with_context(|| format!("Failed to parse roster JSON: {}", path.display()))?;

    Ok(records)
}

/// Write a roster to a pretty-printed JSON array file, creating parent
/// directories as needed.
pub fn save_roster(path: &Path, records: &[TransferRecord]) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create output directory: {}", parent.display()))?;
    }

    let json_str = serde_json::to_string_pretty(records).context("Failed to serialize roster")?;

    fs::write(path, json_str)
        .with_context(|| format!("Failed to write roster file: {}", path.display()))?;

    Ok(())
}

/// Render a roster as a fixed-width text table.
pub fn format_roster_table(records: &[TransferRecord]) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{:<6} {:<20} {:<5} {:<15} {:>3} {:>14} {:>7} {:>5}\n",
        "ID", "NAME", "POS", "NATIONALITY", "AGE", "VALUE", "MONTHS", "G+A"
    ));

    for record in records {
        out.push_str(&format!(
            "{:<6} {:<20} {:<5} {:<15} {:>3} {:>14.0} {:>7} {:>5}\n",
            record.player_id,
            record.name,
            record.position,
            record.nationality,
            record.age,
            record.market_value,
            record.contract_months,
            record.goal_contribution
        ));
    }

    out
}
