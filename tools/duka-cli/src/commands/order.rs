//! Place the order.

use std::cell::RefCell;
use std::rc::Rc;

use anyhow::{bail, Result};
use dialoguer::Confirm;
use duka_commerce::checkout::OrderReceipt;
use duka_storefront::{Action, EventKind, StoreEvent};

use super::cart::{offline_storefront, print_cart};
use super::OrderArgs;
use crate::context::Context;

/// Run the order command.
pub async fn run(args: OrderArgs, ctx: &Context) -> Result<()> {
    let mut storefront = offline_storefront(ctx)?;

    if !storefront.cart().is_empty() && !args.yes && !ctx.output.is_json() {
        print_cart(&storefront, ctx);
        ctx.output.info("");
        let confirmed = Confirm::new()
            .with_prompt("Place this order?")
            .default(true)
            .interact()?;

        if !confirmed {
            ctx.output.warn("Order cancelled");
            return Ok(());
        }
    }

    let receipt: Rc<RefCell<Option<OrderReceipt>>> = Rc::new(RefCell::new(None));
    let sink = Rc::clone(&receipt);
    storefront.on(EventKind::OrderPlaced, move |event| {
        if let StoreEvent::OrderPlaced(placed) = event {
            *sink.borrow_mut() = Some(placed.clone());
        }
    });

    storefront.dispatch(Action::PlaceOrder)?;

    let placed = receipt.borrow_mut().take();
    let Some(receipt) = placed else {
        let message = storefront
            .ui()
            .toast
            .as_ref()
            .map(|t| t.message.clone())
            .unwrap_or_default();
        bail!(message);
    };

    if ctx.output.is_json() {
        ctx.output.json(&receipt);
        return Ok(());
    }

    if let Some(toast) = &storefront.ui().toast {
        ctx.output.success(&toast.message);
    }
    ctx.output.kv("Order", &receipt.order_number);
    ctx.output.kv("Items", &receipt.item_count().to_string());
    ctx.output.kv("Total", &receipt.total.display());
    ctx.output.kv(
        "Placed",
        &receipt
            .placed_at
            .with_timezone(&chrono::Local)
            .format("%Y-%m-%d %H:%M:%S")
            .to_string(),
    );

    Ok(())
}
