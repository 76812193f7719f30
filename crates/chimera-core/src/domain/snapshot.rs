//! The bundle of inputs that feeds one dashboard render.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::error::ValidationError;
use super::glyph::Glyph;
use super::log_entry::LogEntry;
use super::stat::{ChangeType, StatDescriptor};
use super::target::Target;

/// Number of cards in the stat grid.
pub const STAT_GRID_WIDTH: usize = 4;

/// Everything the dashboard displays. A future data source fills this in;
/// the renderer only reads it.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct DashboardSnapshot {
    #[serde(default)]
    pub stats: Vec<StatDescriptor>,

    #[serde(default)]
    pub targets: Vec<Target>,

    #[serde(default)]
    pub logs: Vec<LogEntry>,
}

impl DashboardSnapshot {
    /// The idle dashboard: zeroed counters, no targets, no activity.
    pub fn placeholder() -> Self {
        Self {
            stats: vec![
                StatDescriptor::new(
                    "POTENTIAL EARNINGS (24H)",
                    "$0",
                    Glyph::DollarSign,
                    "System Idle",
                    ChangeType::Increase,
                ),
                StatDescriptor::new(
                    "REPORTS SUBMITTED (24H)",
                    "0",
                    Glyph::FileText,
                    "No activity",
                    ChangeType::Increase,
                ),
                StatDescriptor::new(
                    "VULNERABILITIES FOUND (24H)",
                    "0",
                    Glyph::Bug,
                    "No activity",
                    ChangeType::Increase,
                ),
                StatDescriptor::new(
                    "ACTIVE HUNTS",
                    "0",
                    Glyph::Target,
                    "Awaiting command",
                    ChangeType::Increase,
                ),
            ],
            targets: Vec::new(),
            logs: Vec::new(),
        }
    }

    /// Check the structural invariants the renderer relies on.
    ///
    /// # Errors
    ///
    /// - `ValidationError::StatGridSize`: stat count differs from [`STAT_GRID_WIDTH`].
    /// - `ValidationError::EmptyStatTitle`: a stat has a blank title.
    /// - `ValidationError::DuplicateTargetName`: two targets share a name.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.stats.len() != STAT_GRID_WIDTH {
            return Err(ValidationError::StatGridSize {
                expected: STAT_GRID_WIDTH,
                actual: self.stats.len(),
            });
        }

        if let Some(index) = self.stats.iter().position(|s| s.title.trim().is_empty()) {
            return Err(ValidationError::EmptyStatTitle { index });
        }

        let mut seen = HashSet::new();
        for target in &self.targets {
            if !seen.insert(target.name.as_str()) {
                return Err(ValidationError::DuplicateTargetName {
                    name: target.name.clone(),
                });
            }
        }

        Ok(())
    }
}
