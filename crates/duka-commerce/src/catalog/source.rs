//! Where the catalog comes from.

use async_trait::async_trait;

use crate::catalog::Product;
use crate::error::CommerceError;

/// A source of the product catalog payload.
///
/// Implementations perform exactly one fetch per call and never retry.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Fetch and parse the full product list.
    async fn fetch_products(&self) -> Result<Vec<Product>, CommerceError>;

    /// Human-readable description of the source for logs.
    fn describe(&self) -> String;
}

/// A catalog held in memory, used for tests and embedded demos.
#[derive(Debug, Clone, Default)]
pub struct StaticCatalogSource {
    products: Vec<Product>,
}

impl StaticCatalogSource {
    /// Create a source that always yields the given products.
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// Create a source from a JSON payload.
    pub fn from_json(json: &str) -> Result<Self, CommerceError> {
        let products = serde_json::from_str(json)?;
        Ok(Self { products })
    }
}

#[async_trait]
impl CatalogSource for StaticCatalogSource {
    async fn fetch_products(&self) -> Result<Vec<Product>, CommerceError> {
        Ok(self.products.clone())
    }

    fn describe(&self) -> String {
        format!("static catalog ({} products)", self.products.len())
    }
}

/// A source that always fails, for exercising the unavailable state.
#[derive(Debug, Clone)]
pub struct UnavailableCatalogSource {
    reason: String,
}

impl UnavailableCatalogSource {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

#[async_trait]
impl CatalogSource for UnavailableCatalogSource {
    async fn fetch_products(&self) -> Result<Vec<Product>, CommerceError> {
        Err(CommerceError::CatalogUnavailable(self.reason.clone()))
    }

    fn describe(&self) -> String {
        "unavailable catalog".to_string()
    }
}
