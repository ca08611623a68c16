//! Durable key-value storage for the Duka storefront.
//!
//! Provides a string-keyed store abstraction with two backends and a typed
//! wrapper that handles JSON serialization.
//!
//! # Example
//!
//! ```rust
//! use duka_cache::{Cache, MemoryStore};
//! use serde::{Serialize, Deserialize};
//!
//! #[derive(Serialize, Deserialize, PartialEq, Debug)]
//! struct Line {
//!     id: u64,
//!     quantity: i64,
//! }
//!
//! let mut cache = Cache::new(MemoryStore::new());
//! cache.set("cart", &vec![Line { id: 1, quantity: 2 }]).unwrap();
//!
//! let cart: Option<Vec<Line>> = cache.get("cart").unwrap();
//! assert_eq!(cart.unwrap()[0].quantity, 2);
//!
//! cache.delete("cart").unwrap();
//! assert!(!cache.exists("cart").unwrap());
//! ```

mod error;
mod kv;
mod store;

pub use error::CacheError;
pub use kv::Cache;
pub use store::{FileStore, KeyValueStore, MemoryStore};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{Cache, CacheError, FileStore, KeyValueStore, MemoryStore};
}
