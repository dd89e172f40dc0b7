//! Error types for rating values

use thiserror::Error;

/// Contract violations raised while building rating values.
///
/// These are never access outcomes: a viewer who may not see a title gets a
/// denied [`crate::Verdict`], not one of these.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RatingError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Unknown classification: {0}")]
    UnknownClassification(String),
}

/// Result type for rating operations
pub type Result<T> = std::result::Result<T, RatingError>;
