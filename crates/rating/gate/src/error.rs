//! Error types for access decisions

use rating_catalog::CatalogError;
use rating_types::RatingError;
use thiserror::Error;

/// Hard failures of the gate. Denials are never reported through here.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GateError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Invalid gate configuration: {0}")]
    InvalidConfiguration(String),

    #[error(transparent)]
    Rating(#[from] RatingError),

    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

/// Result type for gate operations
pub type Result<T> = std::result::Result<T, GateError>;
