//! Error types.

use thiserror::Error;

/// Errors raised outside the gesture loop.
///
/// Gesture handling itself never fails; these only surface while parsing
/// anchors or loading configuration.
#[derive(Debug, Error)]
pub enum TransformError {
    #[error("Unknown anchor: {0}")]
    UnknownAnchor(String),
    #[error("Invalid configuration: {0}")]
    Config(#[from] serde_json::Error),
    #[error("Invalid configuration: {field} must be {expected}, got {value}")]
    ConfigValue {
        field: &'static str,
        expected: &'static str,
        value: f64,
    },
}

/// Result type for transformer operations.
pub type TransformResult<T> = Result<T, TransformError>;
