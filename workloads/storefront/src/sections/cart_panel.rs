//! Cart sidebar renderers: line rows, total and the header badge.

use duka_commerce::cart::CartLine;
use duka_commerce::Money;

use crate::events::controls;
use crate::html::escape_html;

/// Render the cart rows, or the empty message.
pub fn render_cart_items(lines: &[CartLine]) -> String {
    if lines.is_empty() {
        return "<p>Your cart is empty.</p>".to_string();
    }

    lines.iter().map(render_cart_line).collect()
}

fn render_cart_line(line: &CartLine) -> String {
    format!(
        r#"<div class="cart-item" data-product-id="{id}">
    <img src="{image}" alt="{name}">
    <div class="cart-item-info">
        <p>{name}</p>
        <p>{price} x {quantity}</p>
    </div>
    <div class="cart-controls">
        <button data-action="{dec}" data-product-id="{id}">-</button>
        <button data-action="{inc}" data-product-id="{id}">+</button>
        <button data-action="{remove}" data-product-id="{id}">❌</button>
    </div>
</div>
"#,
        id = line.id,
        image = escape_html(&line.image),
        name = escape_html(&line.name),
        price = escape_html(&line.price.display()),
        quantity = line.quantity,
        dec = controls::DECREMENT,
        inc = controls::INCREMENT,
        remove = controls::REMOVE,
    )
}

/// Render the total line.
pub fn render_cart_total(total: Money) -> String {
    format!("<strong>Total:</strong> {}", escape_html(&total.display()))
}

/// Render the item-count badge text.
pub fn render_cart_count(count: i64) -> String {
    count.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use duka_commerce::{Currency, ProductId};

    fn line(id: u64, name: &str, cents: i64, quantity: i64) -> CartLine {
        CartLine {
            id: ProductId::new(id),
            name: name.to_string(),
            price: Money::new(cents, Currency::KES),
            image: format!("img/{}.jpg", id),
            quantity,
        }
    }

    #[test]
    fn test_empty_cart() {
        assert_eq!(render_cart_items(&[]), "<p>Your cart is empty.</p>");
        assert_eq!(
            render_cart_total(Money::zero(Currency::KES)),
            "<strong>Total:</strong> Ksh 0.00"
        );
    }

    #[test]
    fn test_rows_show_unit_price_and_quantity() {
        let html = render_cart_items(&[line(1, "Smart TV", 100_000, 2), line(2, "Speaker", 50_000, 1)]);
        assert!(html.contains("<p>Ksh 1,000.00 x 2</p>"));
        assert!(html.contains("<p>Ksh 500.00 x 1</p>"));
        assert!(html.contains(r#"data-action="decrement" data-product-id="1""#));
        assert!(html.contains(r#"data-action="increment" data-product-id="2""#));
        assert!(html.contains(r#"data-action="remove" data-product-id="2""#));
    }

    #[test]
    fn test_total_and_count() {
        assert_eq!(
            render_cart_total(Money::new(250_000, Currency::KES)),
            "<strong>Total:</strong> Ksh 2,500.00"
        );
        assert_eq!(render_cart_count(3), "3");
    }
}
