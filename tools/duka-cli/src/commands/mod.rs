//! CLI command implementations.

pub mod cart;
pub mod config;
pub mod order;
pub mod products;
pub mod render;
pub mod show;

use clap::{Args, Subcommand};
use duka_commerce::ProductId;

/// Arguments for the products command.
#[derive(Args)]
pub struct ProductsArgs {
    /// Only products in this category (`all` for every product).
    #[arg(short, long, conflicts_with = "search")]
    pub category: Option<String>,

    /// Only products whose name contains this text.
    #[arg(short, long)]
    pub search: Option<String>,
}

/// Arguments for the cart command.
#[derive(Args)]
pub struct CartArgs {
    #[command(subcommand)]
    pub command: Option<CartCommand>,
}

#[derive(Subcommand)]
pub enum CartCommand {
    /// Show the cart.
    Show,
    /// Add one unit of a product.
    Add {
        /// Product id.
        id: ProductId,
    },
    /// Increase a line's quantity by one.
    Inc {
        /// Product id.
        id: ProductId,
    },
    /// Decrease a line's quantity by one, removing it at zero.
    Dec {
        /// Product id.
        id: ProductId,
    },
    /// Remove a line.
    Remove {
        /// Product id.
        id: ProductId,
    },
}

/// Arguments for the order command.
#[derive(Args)]
pub struct OrderArgs {
    /// Skip confirmation prompt.
    #[arg(short, long)]
    pub yes: bool,
}

/// Arguments for the show command.
#[derive(Args)]
pub struct ShowArgs {
    /// Product id.
    pub id: ProductId,
}

/// Arguments for the render command.
#[derive(Args)]
pub struct RenderArgs {
    /// Output file (default: stdout).
    #[arg(short, long)]
    pub out: Option<String>,

    /// Category to filter the grid by.
    #[arg(short, long, conflicts_with = "search")]
    pub category: Option<String>,

    /// Search term for the grid.
    #[arg(short, long)]
    pub search: Option<String>,

    /// Render with the dark theme.
    #[arg(long)]
    pub dark: bool,

    /// Render with the cart panel open.
    #[arg(long)]
    pub open_cart: bool,

    /// Render with the detail modal open for this product.
    #[arg(long)]
    pub details: Option<ProductId>,
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration.
    Show,
    /// Initialize a new config file.
    Init {
        /// Force overwrite existing config.
        #[arg(short, long)]
        force: bool,
    },
}
