/// Result type for Q-loss operations
pub type Result<T> = std::result::Result<T, QLossError>;

/// Main error type for the Q-loss crate
#[derive(Debug, thiserror::Error)]
pub enum QLossError {
    /// Prediction and target batches do not have the same shape
    #[error("Dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch {
        expected: String,
        actual: String,
    },

    /// Invalid configuration value
    #[error("Invalid parameter '{name}': {reason}")]
    InvalidParameter {
        name: String,
        reason: String,
    },

    /// A tensor named in the input schema was not supplied
    #[error("Missing loss input '{name}'")]
    MissingInput {
        name: String,
    },

    /// IO errors (config files)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

// Helper functions for common error patterns
impl QLossError {
    pub fn dimension_mismatch<S: Into<String>>(expected: S, actual: S) -> Self {
        QLossError::DimensionMismatch {
            expected: expected.into(),
            actual: actual.into(),
        }
    }

    pub fn invalid_parameter<S: Into<String>>(name: S, reason: S) -> Self {
        QLossError::InvalidParameter {
            name: name.into(),
            reason: reason.into(),
        }
    }

    /// True for errors raised while validating configuration
    pub fn is_config_error(&self) -> bool {
        matches!(self, QLossError::InvalidParameter { .. })
    }

    /// True for errors raised because input batches have incompatible shapes
    pub fn is_shape_error(&self) -> bool {
        matches!(self, QLossError::DimensionMismatch { .. })
    }
}
