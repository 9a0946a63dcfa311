//! Commerce error types.

use storee_data::FetchError;
use thiserror::Error;

/// Errors that can occur in storefront operations.
#[derive(Error, Debug)]
pub enum CommerceError {
    /// Unknown category key.
    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    /// A selection names a group or value the product does not offer.
    #[error("Invalid selection: {0}")]
    InvalidSelection(String),

    /// The table store could not be read or written.
    #[error("Store error: {0}")]
    Store(#[from] FetchError),

    /// A seed catalog file that is not valid JSON for the catalog shape.
    #[error("Malformed seed catalog: {0}")]
    MalformedCatalog(#[from] serde_json::Error),

    /// Validation error.
    #[error("Validation error: {0}")]
    ValidationError(String),
}
