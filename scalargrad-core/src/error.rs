use thiserror::Error;

/// Custom error type for the scalargrad consumers (network, optimizer, data).
///
/// The differentiation engines themselves never fail: numeric anomalies
/// surface as NaN or infinities in values and gradients.
#[derive(Error, Debug, PartialEq, Clone)]
pub enum ScalarGradError {
    #[error("Input size mismatch: expected {expected}, got {actual}")]
    InputSizeMismatch { expected: usize, actual: usize },

    #[error("Target size mismatch: expected {expected}, got {actual}")]
    TargetSizeMismatch { expected: usize, actual: usize },

    #[error("Invalid layer sizes {sizes:?}: {reason}")]
    InvalidLayerSizes { sizes: Vec<usize>, reason: String },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Invalid hyperparameter '{name}': {value}")]
    InvalidHyperparameter { name: &'static str, value: f64 },

    #[error("Optimizer expected {expected} parameters, got {actual}")]
    ParameterCountMismatch { expected: usize, actual: usize },

    #[error("Index out of bounds: index {index} for length {len}")]
    IndexOutOfBounds { index: usize, len: usize },

    #[error("Cannot compute a loss over an empty batch")]
    EmptyBatch,
}
