//! Reading and writing dashboard artifacts on disk.

use anyhow::{Context, Result};
use std::path::Path;

use crate::domain::DashboardSnapshot;

/// Load a snapshot from a JSON file. Unknown change types or target statuses
/// fail here.
pub fn read_snapshot_json(path: &Path) -> Result<DashboardSnapshot> {
    let content =
        std::fs::read_to_string(path).with_context(|| format!("read snapshot {:?}", path))?;
    serde_json::from_str(&content).with_context(|| format!("parse snapshot {:?}", path))
}

/// Write a snapshot as pretty JSON.
pub fn write_snapshot_json(path: &Path, snapshot: &DashboardSnapshot) -> Result<()> {
    let content = serde_json::to_string_pretty(snapshot).context("serialize snapshot")?;
    std::fs::write(path, content).with_context(|| format!("write {:?}", path))?;
    Ok(())
}

/// Write rendered markup.
pub fn write_html(path: &Path, markup: &str) -> Result<()> {
    std::fs::write(path, markup).with_context(|| format!("write {:?}", path))?;
    Ok(())
}
