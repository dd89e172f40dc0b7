//! Error types for catalog access

use rating_types::{ContentId, RatingError};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Catalog errors
#[derive(Debug, Error, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CatalogError {
    /// Blank or otherwise unusable query
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Strict title lookup found nothing
    #[error("Content not found: {0}")]
    NotFound(String),

    /// Strict id lookup found nothing
    #[error("Content not found with id: {0}")]
    IdNotFound(ContentId),

    /// Id or normalized title already taken
    #[error("Duplicate content: {0}")]
    Duplicate(String),
}

impl From<RatingError> for CatalogError {
    fn from(e: RatingError) -> Self {
        CatalogError::InvalidInput(e.to_string())
    }
}

/// Result type for catalog operations
pub type Result<T> = std::result::Result<T, CatalogError>;
