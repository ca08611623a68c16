//! List the catalog.

use anyhow::Result;
use duka_commerce::catalog::{CategoryFilter, Product, ALL_CATEGORIES};

use super::ProductsArgs;
use crate::context::Context;

/// Run the products command.
pub async fn run(args: ProductsArgs, ctx: &Context) -> Result<()> {
    let catalog = ctx.load_catalog().await?;

    let products: Vec<&Product> = match &args.search {
        Some(term) => catalog.filter_by_search_term(term),
        None => {
            let category = args.category.as_deref().unwrap_or(ALL_CATEGORIES);
            catalog.filter_by_category(&CategoryFilter::from_button(category))
        }
    };

    if ctx.output.is_json() {
        ctx.output.json(&products);
        return Ok(());
    }

    ctx.output.header(&format!("Products ({})", products.len()));
    if products.is_empty() {
        ctx.output.info("No products found.");
        return Ok(());
    }

    ctx.output.products(&products);

    let categories = catalog.categories().join(", ");
    ctx.output.info("");
    ctx.output.kv("categories", &categories);

    Ok(())
}
