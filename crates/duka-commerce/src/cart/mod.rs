//! Shopping cart module.
//!
//! Contains the cart line snapshot and the persisted cart store.

mod line;
mod store;

pub use line::CartLine;
pub use store::{CartStore, QuantityChange, CART_KEY};
