use thiserror::Error;

/// Result alias used across the crate.
pub type FlowchartResult<T> = Result<T, FlowchartError>;

#[derive(Debug, Error)]
pub enum FlowchartError {
    /// The document does not have the compact shape: wrong-length position,
    /// a connection that is not a pair, a missing field, bad JSON.
    #[error("invalid flowchart format: {reason}")]
    InvalidFormat { reason: String },

    /// A typed value failed to serialize.
    #[error("json serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("toon codec failed: {reason}")]
    Toon { reason: String },
}

impl FlowchartError {
    pub fn invalid_format(reason: impl Into<String>) -> Self {
        FlowchartError::InvalidFormat {
            reason: reason.into(),
        }
    }

    pub fn is_invalid_format(&self) -> bool {
        matches!(self, FlowchartError::InvalidFormat { .. })
    }
}
