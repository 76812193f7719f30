//! Stat card descriptors.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::ChimeraError;
use super::glyph::Glyph;

/// Direction of a stat's delta; selects the green or red change style.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(try_from = "String", into = "String")]
pub enum ChangeType {
    Increase,
    Decrease,
}

impl ChangeType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChangeType::Increase => "increase",
            ChangeType::Decrease => "decrease",
        }
    }
}

impl fmt::Display for ChangeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ChangeType {
    type Err = ChimeraError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "increase" => Ok(ChangeType::Increase),
            "decrease" => Ok(ChangeType::Decrease),
            other => Err(ChimeraError::UnknownChangeType(other.to_string())),
        }
    }
}

impl TryFrom<String> for ChangeType {
    type Error = ChimeraError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ChangeType> for String {
    fn from(change: ChangeType) -> Self {
        change.as_str().to_string()
    }
}

/// One labeled metric in the stat grid.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StatDescriptor {
    pub title: String,

    /// Display string, e.g. `$0`.
    pub value: String,

    pub icon: Glyph,

    /// Delta caption under the value.
    pub change: String,

    #[serde(alias = "changeType")]
    pub change_type: ChangeType,
}

impl StatDescriptor {
    pub fn new(
        title: impl Into<String>,
        value: impl Into<String>,
        icon: Glyph,
        change: impl Into<String>,
        change_type: ChangeType,
    ) -> Self {
        Self {
            title: title.into(),
            value: value.into(),
            icon,
            change: change.into(),
            change_type,
        }
    }
}
