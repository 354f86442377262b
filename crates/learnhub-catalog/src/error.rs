//! Catalog error types.

use thiserror::Error;

/// Errors that can occur when loading or addressing the catalog.
///
/// Querying itself never fails; these cover the edges around it.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CatalogError {
    /// The catalog document could not be decoded.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Sort key not recognized.
    #[error("Unknown sort key: {0} (expected newest, popular, rating or duration)")]
    UnknownSortKey(String),

    /// Page size must be positive.
    #[error("Invalid page size: {0}")]
    InvalidPageSize(usize),

    /// At least one page must be requested.
    #[error("Invalid pages requested: {0}")]
    InvalidPagesRequested(usize),

    /// No item with the given id.
    #[error("Item not found: {0}")]
    ItemNotFound(String),
}

impl From<serde_json::Error> for CatalogError {
    fn from(e: serde_json::Error) -> Self {
        CatalogError::Serialization(e.to_string())
    }
}
