//! Checkout module.
//!
//! Placing an order turns the cart contents into a receipt.

mod order;

pub use order::OrderReceipt;
