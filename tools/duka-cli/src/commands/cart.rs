//! Cart operations against the file-backed store.

use anyhow::Result;
use duka_cache::FileStore;
use duka_commerce::catalog::CatalogStore;
use duka_commerce::ProductId;
use duka_storefront::{Action, Storefront};
use serde_json::json;

use super::{CartArgs, CartCommand};
use crate::context::Context;

/// Run the cart command.
pub async fn run(args: CartArgs, ctx: &Context) -> Result<()> {
    match args.command.unwrap_or(CartCommand::Show) {
        CartCommand::Show => {
            let storefront = offline_storefront(ctx)?;
            print_cart(&storefront, ctx);
            Ok(())
        }
        CartCommand::Add { id } => {
            let mut storefront = ctx.storefront().await?;
            apply(&mut storefront, Action::AddToCart(id), id, ctx, "in the catalog")
        }
        CartCommand::Inc { id } => {
            let mut storefront = offline_storefront(ctx)?;
            let action = Action::ChangeQuantity { id, delta: 1 };
            apply(&mut storefront, action, id, ctx, "in the cart")
        }
        CartCommand::Dec { id } => {
            let mut storefront = offline_storefront(ctx)?;
            let action = Action::ChangeQuantity { id, delta: -1 };
            apply(&mut storefront, action, id, ctx, "in the cart")
        }
        CartCommand::Remove { id } => {
            let mut storefront = offline_storefront(ctx)?;
            apply(&mut storefront, Action::RemoveFromCart(id), id, ctx, "in the cart")
        }
    }
}

/// A session that only needs the cart.
pub fn offline_storefront(ctx: &Context) -> Result<Storefront<FileStore>> {
    let cart = ctx.open_cart()?;
    Ok(Storefront::new(CatalogStore::new(), cart, &ctx.logger))
}

fn apply(
    storefront: &mut Storefront<FileStore>,
    action: Action,
    id: ProductId,
    ctx: &Context,
    missing_from: &str,
) -> Result<()> {
    let updates = storefront.dispatch(action)?;
    if updates.is_empty() {
        ctx.output.warn(&format!("No product with id {} {}", id, missing_from));
    } else if let Some(toast) = &storefront.ui().toast {
        ctx.output.success(&toast.message);
    }
    print_cart(storefront, ctx);
    Ok(())
}

/// Print the cart lines and total.
pub fn print_cart(storefront: &Storefront<FileStore>, ctx: &Context) {
    let cart = storefront.cart();

    if ctx.output.is_json() {
        ctx.output.json(&json!({
            "lines": cart.lines(),
            "count": cart.count(),
            "total": cart.total().to_decimal(),
            "total_display": cart.total().display(),
        }));
        return;
    }

    ctx.output.header(&format!("Cart ({} items)", cart.count()));
    if cart.is_empty() {
        ctx.output.info("Your cart is empty.");
        return;
    }

    ctx.output.cart_lines(cart.lines(), cart.total());
}
