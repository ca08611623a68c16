//! Storefront domain types and logic for Duka.
//!
//! - **Money**: cent-exact amounts and the `Ksh` formatter
//! - **Catalog**: products, category filters, catalog sources and the catalog store
//! - **Cart**: the persisted cart store
//! - **Checkout**: order receipts
//!
//! # Example
//!
//! ```rust
//! use duka_cache::MemoryStore;
//! use duka_commerce::prelude::*;
//! use duka_observability::StructuredLogger;
//!
//! let catalog = CatalogStore::from_products(vec![
//!     Product::new(1, "Smart TV", Money::new(100_000, Currency::KES), "tvs"),
//! ]);
//!
//! let logger = StructuredLogger::disabled();
//! let mut cart = CartStore::open(MemoryStore::new(), &logger);
//! cart.add_to_cart(&catalog, ProductId::new(1)).unwrap();
//! cart.add_to_cart(&catalog, ProductId::new(1)).unwrap();
//!
//! assert_eq!(cart.total().display(), "Ksh 2,000.00");
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod cart;
pub mod catalog;
pub mod checkout;

pub use error::CommerceError;
pub use ids::*;
pub use money::{format_ksh, Currency, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::*;
    pub use crate::money::{format_ksh, Currency, Money};

    // Catalog
    pub use crate::catalog::{
        CatalogSource, CatalogState, CatalogStore, CategoryFilter, Product, StaticCatalogSource,
    };

    // Cart
    pub use crate::cart::{CartLine, CartStore, QuantityChange, CART_KEY};

    // Checkout
    pub use crate::checkout::OrderReceipt;
}
