//! Storefront controller and HTML region renderers.
//!
//! The page is a set of named regions (product grid, cart panel, detail
//! modal, recommendation strip, toast). Renderers in [`sections`] turn store
//! state into region markup; [`Storefront`] ties user [`Action`]s to store
//! operations and reports the [`RegionUpdate`]s a host applies.
//!
//! # Example
//!
//! ```rust
//! use duka_cache::MemoryStore;
//! use duka_commerce::prelude::*;
//! use duka_observability::StructuredLogger;
//! use duka_storefront::{Action, Region, RegionUpdate, Storefront};
//!
//! let logger = StructuredLogger::disabled();
//! let catalog = CatalogStore::from_products(vec![
//!     Product::new(1, "Smart TV", Money::new(100_000, Currency::KES), "tvs"),
//! ]);
//! let cart = CartStore::open(MemoryStore::new(), &logger);
//! let mut storefront = Storefront::new(catalog, cart, &logger);
//!
//! let updates = storefront.dispatch(Action::AddToCart(ProductId::new(1))).unwrap();
//! assert!(updates.contains(&RegionUpdate::replace(Region::CartCount, "1")));
//! ```

mod app;
pub mod events;
pub mod html;
pub mod page;
pub mod sections;
pub mod ui;

pub use app::{Storefront, StorefrontSettings, ORDER_PLACED_MESSAGE};
pub use events::{
    controls, Action, EventKind, ListenerId, Listeners, Region, RegionUpdate, StoreEvent,
};
pub use page::{HeadContent, PageView, Shell};
pub use ui::{ActiveFilter, CartPanel, GridView, Modal, Theme, Toast, ToastLevel, UiState, TOAST_DURATION};
