//! Write a page snapshot.

use std::fs;
use std::time::Instant;

use anyhow::{Context as _, Result};
use duka_commerce::catalog::CategoryFilter;
use duka_storefront::Action;

use super::RenderArgs;
use crate::context::Context;

/// Run the render command.
pub async fn run(args: RenderArgs, ctx: &Context) -> Result<()> {
    let mut storefront = ctx.storefront().await?;

    let mut actions = Vec::new();
    if let Some(category) = &args.category {
        actions.push(Action::SelectCategory(CategoryFilter::from_button(category)));
    }
    if let Some(term) = &args.search {
        actions.push(Action::Search(term.clone()));
    }
    if args.dark {
        actions.push(Action::ToggleTheme);
    }
    if args.open_cart {
        actions.push(Action::OpenCart);
    }
    if let Some(id) = args.details {
        actions.push(Action::ViewDetails(id));
    }
    for action in actions {
        storefront.dispatch(action)?;
    }

    let now = Instant::now();
    if ctx.output.is_json() {
        ctx.output.json(&storefront.render_all(now));
        return Ok(());
    }

    let page = storefront.render_page(now);
    match &args.out {
        Some(out) => {
            let path = ctx.resolve_path(out);
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create {}", parent.display()))?;
            }
            fs::write(&path, page)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            ctx.output.success(&format!(
                "Rendered {} products to {}",
                storefront.visible_products().len(),
                path.display()
            ));
        }
        None => print!("{}", page),
    }

    Ok(())
}
