//! Network-related error types.

use thiserror::Error;

/// A `(rows, cols)` pair describing a matrix shape.
pub type Shape = (usize, usize);

/// Errors that can occur while building or running a network.
#[derive(Debug, Error)]
pub enum NetworkError {
    /// The network was configured with an impossible layout or learning rate.
    #[error("Invalid layer configuration: {message}")]
    InvalidLayerConfig { message: String },

    /// Two matrix operands had incompatible shapes.
    #[error("Dimension mismatch in {op}: {}x{} and {}x{}", .left.0, .left.1, .right.0, .right.1)]
    DimensionMismatch {
        op: &'static str,
        left: Shape,
        right: Shape,
    },

    #[error("Training error: {message}")]
    TrainingError { message: String },

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

impl NetworkError {
    pub(crate) fn invalid_config(message: impl Into<String>) -> Self {
        NetworkError::InvalidLayerConfig {
            message: message.into(),
        }
    }

    pub(crate) fn mismatch(op: &'static str, left: Shape, right: Shape) -> Self {
        NetworkError::DimensionMismatch { op, left, right }
    }
}
