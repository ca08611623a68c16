//! In-memory catalog populated once per session.

use std::time::Instant;

use duka_observability::StructuredLogger;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::catalog::{CatalogSource, CategoryFilter, Product};
use crate::error::CommerceError;
use crate::ids::ProductId;

/// Default size of the recommendation strip.
pub const DEFAULT_RECOMMENDATIONS: usize = 5;

/// Load state of the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CatalogState {
    /// No load has been attempted yet.
    #[default]
    NotLoaded,
    /// The product list came from the source.
    Loaded,
    /// The fetch failed; the product list is empty.
    Unavailable(String),
}

/// The session's product catalog.
///
/// Filtering borrows from the stored list and never mutates it.
#[derive(Debug, Clone, Default)]
pub struct CatalogStore {
    products: Vec<Product>,
    state: CatalogState,
}

impl CatalogStore {
    /// Create an empty, not-yet-loaded catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a catalog that is already loaded with `products`.
    pub fn from_products(products: Vec<Product>) -> Self {
        Self {
            products,
            state: CatalogState::Loaded,
        }
    }

    /// Fetch the product list once from `source`, replacing any previous list.
    ///
    /// Failures are not retried: the list is left empty and the state moves
    /// to [`CatalogState::Unavailable`] with the reason.
    pub async fn load(
        &mut self,
        source: &dyn CatalogSource,
        logger: &StructuredLogger,
    ) -> &CatalogState {
        let started = Instant::now();
        match source.fetch_products().await {
            Ok(products) => {
                logger
                    .info_builder("Catalog loaded")
                    .field("source", source.describe())
                    .field_i64("products", products.len() as i64)
                    .duration_ms("elapsed_ms", started.elapsed())
                    .emit();
                self.products = products;
                self.state = CatalogState::Loaded;
            }
            Err(e) => {
                logger
                    .warn_builder("Catalog unavailable")
                    .field("source", source.describe())
                    .field("error", e.to_string())
                    .emit();
                self.products.clear();
                self.state = CatalogState::Unavailable(match e {
                    CommerceError::CatalogUnavailable(reason) => reason,
                    other => other.to_string(),
                });
            }
        }
        &self.state
    }

    /// Current load state.
    pub fn state(&self) -> &CatalogState {
        &self.state
    }

    /// All products in catalog order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Number of products.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Check if the catalog holds no products.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Look up a product by id.
    pub fn find(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Products passing a category filter, in catalog order.
    pub fn filter_by_category(&self, filter: &CategoryFilter) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|p| filter.matches(&p.category))
            .collect()
    }

    /// Products whose name contains `term`, ignoring case.
    pub fn filter_by_search_term(&self, term: &str) -> Vec<&Product> {
        let term = term.to_lowercase();
        self.products
            .iter()
            .filter(|p| p.name.to_lowercase().contains(&term))
            .collect()
    }

    /// Distinct categories in first-seen order.
    pub fn categories(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for product in &self.products {
            if !seen.contains(&product.category.as_str()) {
                seen.push(&product.category);
            }
        }
        seen
    }

    /// A uniform random sample of up to `count` distinct products.
    pub fn recommendations<R: Rng + ?Sized>(&self, rng: &mut R, count: usize) -> Vec<&Product> {
        self.products.choose_multiple(rng, count).collect()
    }
}
