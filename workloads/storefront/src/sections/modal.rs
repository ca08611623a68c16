//! Product detail modal renderer.

use duka_commerce::catalog::Product;

use crate::events::controls;
use crate::html::escape_html;

/// Render the modal body for a product.
pub fn render_modal_content(product: &Product) -> String {
    let disabled = if product.in_stock() { "" } else { " disabled" };

    format!(
        r#"<img src="{image}" alt="{name}">
<h2>{name}</h2>
<p><strong>Price:</strong> {price}</p>
<p><strong>Stock:</strong> {stock}</p>
<p><strong>Description:</strong> {description}</p>
<div class="modal-buttons">
    <button{disabled} data-action="{add}" data-product-id="{id}" class="add-cart-modal">Add to Cart</button>
    <button data-action="{close}" id="close-modal">Close</button>
</div>"#,
        id = product.id,
        image = escape_html(&product.image),
        name = escape_html(&product.name),
        price = escape_html(&product.price.display()),
        stock = product.stock_text(),
        description = escape_html(&product.description()),
        disabled = disabled,
        add = controls::ADD_TO_CART,
        close = controls::CLOSE_MODAL,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use duka_commerce::{Currency, Money};

    #[test]
    fn test_in_stock_modal() {
        let product = Product::new(4, "Smart TV", Money::new(4_500_000, Currency::KES), "tvs")
            .with_stock(3);
        let html = render_modal_content(&product);
        assert!(html.contains("<h2>Smart TV</h2>"));
        assert!(html.contains("<strong>Price:</strong> Ksh 45,000.00"));
        assert!(html.contains("<strong>Stock:</strong> 3 available"));
        assert!(html.contains("High-quality smart tv perfect for your electronics needs."));
        assert!(html.contains(r#"<button data-action="add-to-cart" data-product-id="4""#));
        assert!(!html.contains("disabled"));
    }

    #[test]
    fn test_out_of_stock_disables_add() {
        let product = Product::new(5, "Radio", Money::new(100, Currency::KES), "audio");
        let html = render_modal_content(&product);
        assert!(html.contains("Out of stock"));
        assert!(html.contains(r#"<button disabled data-action="add-to-cart""#));
    }
}
