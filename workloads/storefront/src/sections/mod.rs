//! Section renderers for the storefront regions.
//!
//! Each renderer is a pure function from state to the inner markup of one
//! region; re-rendering replaces the previous markup wholesale.

mod cart_panel;
mod filters;
mod grid;
mod modal;
mod recommendations;
mod toast;

pub use cart_panel::*;
pub use filters::*;
pub use grid::*;
pub use modal::*;
pub use recommendations::*;
pub use toast::*;
