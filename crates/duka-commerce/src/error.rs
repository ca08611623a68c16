//! Commerce error types.

use thiserror::Error;

/// Errors that can occur in storefront operations.
///
/// Lookup misses (unknown product or cart line) are not errors; the stores
/// treat them as no-ops and report them through `Option`/`bool` returns.
#[derive(Error, Debug)]
pub enum CommerceError {
    /// An order was attempted with nothing in the cart.
    #[error("Your cart is empty!")]
    EmptyCart,

    /// The catalog could not be fetched or parsed.
    #[error("Catalog unavailable: {0}")]
    CatalogUnavailable(String),

    /// Durable storage error.
    #[error("Storage error: {0}")]
    Storage(String),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<duka_cache::CacheError> for CommerceError {
    fn from(e: duka_cache::CacheError) -> Self {
        CommerceError::Storage(e.to_string())
    }
}

impl From<serde_json::Error> for CommerceError {
    fn from(e: serde_json::Error) -> Self {
        CommerceError::SerializationError(e.to_string())
    }
}
