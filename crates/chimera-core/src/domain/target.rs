//! Hunting targets shown in the operations table.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::ChimeraError;

/// Where a target sits in the hunt pipeline.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(try_from = "String", into = "String")]
pub enum TargetStatus {
    Queued,
    Scanning,
    Triaging,
    Reported,
}

impl TargetStatus {
    pub const ALL: [TargetStatus; 4] = [
        TargetStatus::Queued,
        TargetStatus::Scanning,
        TargetStatus::Triaging,
        TargetStatus::Reported,
    ];

    /// Lowercase label, as shown in the status badge.
    pub fn as_str(&self) -> &'static str {
        match self {
            TargetStatus::Queued => "queued",
            TargetStatus::Scanning => "scanning",
            TargetStatus::Triaging => "triaging",
            TargetStatus::Reported => "reported",
        }
    }
}

impl fmt::Display for TargetStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TargetStatus {
    type Err = ChimeraError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TargetStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| ChimeraError::UnknownTargetStatus(s.to_string()))
    }
}

impl TryFrom<String> for TargetStatus {
    type Error = ChimeraError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<TargetStatus> for String {
    fn from(status: TargetStatus) -> Self {
        status.as_str().to_string()
    }
}

/// A bug bounty program under active hunting.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Target {
    /// Program name; unique within a displayed set.
    pub name: String,

    /// Scope expression, e.g. `*.acme.com`.
    pub scope: String,

    pub status: TargetStatus,
}

impl Target {
    pub fn new(name: impl Into<String>, scope: impl Into<String>, status: TargetStatus) -> Self {
        Self {
            name: name.into(),
            scope: scope.into(),
            status,
        }
    }
}
