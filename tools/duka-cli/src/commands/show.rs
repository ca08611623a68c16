//! Product detail view.

use anyhow::{bail, Result};
use duka_storefront::html::render_stars;

use super::ShowArgs;
use crate::context::Context;
use crate::output::stock_badge;

/// Run the show command.
pub async fn run(args: ShowArgs, ctx: &Context) -> Result<()> {
    let catalog = ctx.load_catalog().await?;
    let Some(product) = catalog.find(args.id) else {
        bail!("No product with id {}", args.id);
    };

    if ctx.output.is_json() {
        ctx.output.json(product);
        return Ok(());
    }

    ctx.output.header(&product.name);
    ctx.output.kv("Price", &product.price.display());
    ctx.output.kv("Stock", &stock_badge(product));
    ctx.output.kv(
        "Rating",
        &format!("{} ({:.1})", render_stars(product.filled_stars()), product.effective_rating()),
    );
    ctx.output.kv("Category", &product.category);
    ctx.output.kv("Description", &product.description());
    if !product.image.is_empty() {
        ctx.output.kv("Image", &product.image);
    }

    Ok(())
}
