//! Product catalog module.
//!
//! Contains the product type, the category filter, catalog sources and the
//! in-memory catalog store.

mod filter;
mod product;
mod source;
mod store;

pub use filter::{CategoryFilter, ALL_CATEGORIES};
pub use product::{Product, DEFAULT_RATING, MAX_STARS};
pub use source::{CatalogSource, StaticCatalogSource, UnavailableCatalogSource};
pub use store::{CatalogState, CatalogStore, DEFAULT_RECOMMENDATIONS};
