//! Product grid renderer.

use duka_commerce::catalog::Product;

use crate::events::controls;
use crate::html::{escape_html, render_stars};

/// Render one card per product, or the empty message.
pub fn render_product_grid(products: &[&Product]) -> String {
    if products.is_empty() {
        return render_grid_empty();
    }

    products.iter().map(|p| render_product_card(p)).collect()
}

/// Render a single product card.
pub fn render_product_card(product: &Product) -> String {
    format!(
        r#"<div class="product" data-product-id="{id}">
    <img src="{image}" alt="{name}">
    <h3>{name}</h3>
    <div class="rating">{stars}</div>
    <p class="price">{price}</p>
    <div class="product-buttons">
        <button data-action="{add}" data-product-id="{id}">Add to Cart</button>
        <button data-action="{details}" data-product-id="{id}" class="details-btn">View Details</button>
    </div>
</div>
"#,
        id = product.id,
        image = escape_html(&product.image),
        name = escape_html(&product.name),
        stars = render_stars(product.filled_stars()),
        price = escape_html(&product.price.display()),
        add = controls::ADD_TO_CART,
        details = controls::VIEW_DETAILS,
    )
}

fn render_grid_empty() -> String {
    r#"<p class="grid-message grid-message--empty">No products found.</p>"#.to_string()
}

/// Render the grid when the catalog could not be fetched.
pub fn render_catalog_unavailable(reason: &str) -> String {
    format!(
        r#"<div class="grid-message grid-message--error">
    <p>The catalog is unavailable right now. Please try again later.</p>
    <p class="error-detail">catalog unavailable: {}</p>
</div>"#,
        escape_html(reason)
    )
}
