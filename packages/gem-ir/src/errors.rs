//! Error types for gem-ir
//!
//! Provides unified error handling across the crate.

use thiserror::Error;

use crate::config::ConfigError;

/// Main error type for gem-ir operations
#[derive(Debug, Error)]
pub enum GemError {
    /// The cost table has no rule for this node kind.
    ///
    /// Raised instead of pricing the node at zero: it means the node-kind
    /// enumeration and the cost table have drifted apart.
    #[error("Unsupported node kind: {kind}")]
    UnsupportedKind { kind: &'static str },

    /// Index extent below 1
    #[error("Malformed index: extent must be >= 1, got {extent}")]
    MalformedIndex { extent: u64 },

    /// Structural misuse of a node constructor
    #[error("Invalid node: {0}")]
    InvalidNode(String),

    /// Operation count does not fit in u64
    #[error("Flop count overflow at {kind} node")]
    CostOverflow { kind: &'static str },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl GemError {
    /// Create an invalid node error
    pub fn invalid_node(msg: impl Into<String>) -> Self {
        GemError::InvalidNode(msg.into())
    }

    /// Is this a structural defect in the kind/cost tables?
    pub fn is_unsupported_kind(&self) -> bool {
        matches!(self, GemError::UnsupportedKind { .. })
    }
}

/// Result type alias for gem-ir operations
pub type Result<T> = std::result::Result<T, GemError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = GemError::UnsupportedKind {
            kind: "ComponentTensor",
        };
        assert_eq!(err.to_string(), "Unsupported node kind: ComponentTensor");
        assert!(err.is_unsupported_kind());

        let err = GemError::MalformedIndex { extent: 0 };
        assert!(err.to_string().contains(">= 1"));
        assert!(!err.is_unsupported_kind());
    }

    #[test]
    fn test_config_error_conversion() {
        let err: GemError = ConfigError::MissingVersion.into();
        assert!(matches!(err, GemError::Config(ConfigError::MissingVersion)));
    }
}
