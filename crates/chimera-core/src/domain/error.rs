//! Error taxonomy for the dashboard view model.

/// Violations found when checking a [`DashboardSnapshot`](super::DashboardSnapshot).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("stat grid expects {expected} cards, got {actual}")]
    StatGridSize { expected: usize, actual: usize },

    #[error("stat card at position {index} has an empty title")]
    EmptyStatTitle { index: usize },

    #[error("duplicate target name: {name}")]
    DuplicateTargetName { name: String },
}

/// Dashboard domain errors.
#[derive(Debug, thiserror::Error)]
pub enum ChimeraError {
    #[error("unknown change type: {0:?} (expected \"increase\" or \"decrease\")")]
    UnknownChangeType(String),

    #[error("unknown target status: {0:?}")]
    UnknownTargetStatus(String),

    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for dashboard domain operations.
pub type Result<T> = std::result::Result<T, ChimeraError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_change_type_display() {
        let err = ChimeraError::UnknownChangeType("sideways".to_string());
        let msg = err.to_string();
        assert!(msg.contains("unknown change type"));
        assert!(msg.contains("sideways"));
    }

    #[test]
    fn test_validation_error_wraps() {
        let err: ChimeraError = ValidationError::DuplicateTargetName {
            name: "Acme Corp".to_string(),
        }
        .into();
        assert!(err.to_string().contains("validation error"));
        assert!(err.to_string().contains("Acme Corp"));
    }

    #[test]
    fn test_stat_grid_size_display() {
        let err = ValidationError::StatGridSize {
            expected: 4,
            actual: 3,
        };
        assert_eq!(err.to_string(), "stat grid expects 4 cards, got 3");
    }
}
