//! Activity stream entries.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Source tag of a log entry.
///
/// Parsing never fails: tags outside the six known ones are kept verbatim in
/// [`LogCategory::Unrecognized`] and rendered with the fallback icon.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(from = "String", into = "String")]
pub enum LogCategory {
    Submit,
    Ai,
    Vuln,
    Scan,
    Recon,
    Init,
    Unrecognized(String),
}

impl LogCategory {
    pub fn parse(tag: &str) -> Self {
        match tag {
            "submit" => LogCategory::Submit,
            "ai" => LogCategory::Ai,
            "vuln" => LogCategory::Vuln,
            "scan" => LogCategory::Scan,
            "recon" => LogCategory::Recon,
            "init" => LogCategory::Init,
            other => LogCategory::Unrecognized(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            LogCategory::Submit => "submit",
            LogCategory::Ai => "ai",
            LogCategory::Vuln => "vuln",
            LogCategory::Scan => "scan",
            LogCategory::Recon => "recon",
            LogCategory::Init => "init",
            LogCategory::Unrecognized(tag) => tag.as_str(),
        }
    }

    pub fn is_recognized(&self) -> bool {
        !matches!(self, LogCategory::Unrecognized(_))
    }
}

impl fmt::Display for LogCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for LogCategory {
    fn from(tag: String) -> Self {
        LogCategory::parse(&tag)
    }
}

impl From<LogCategory> for String {
    fn from(category: LogCategory) -> Self {
        match category {
            LogCategory::Unrecognized(tag) => tag,
            known => known.as_str().to_string(),
        }
    }
}

/// A single line of the live activity stream.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LogEntry {
    /// Display timestamp, rendered verbatim.
    pub time: String,

    #[serde(alias = "type")]
    pub category: LogCategory,

    pub message: String,
}

impl LogEntry {
    pub fn new(
        time: impl Into<String>,
        category: LogCategory,
        message: impl Into<String>,
    ) -> Self {
        Self {
            time: time.into(),
            category,
            message: message.into(),
        }
    }
}
