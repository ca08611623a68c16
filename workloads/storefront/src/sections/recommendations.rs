//! Recommendations strip renderer.

use duka_commerce::catalog::Product;

use crate::events::controls;
use crate::html::escape_html;

/// Render the recommendations strip.
pub fn render_recommendations(products: &[&Product]) -> String {
    let items: String = products
        .iter()
        .map(|p| render_recommendation_item(p))
        .collect();

    format!(
        r#"<h3>Recommended for You</h3>
<div class="recommendations-strip">
{items}</div>"#,
        items = items
    )
}

fn render_recommendation_item(product: &Product) -> String {
    format!(
        r#"<div class="product-small" data-action="{details}" data-product-id="{id}"><img src="{image}" alt="{name}"><p>{name}</p></div>
"#,
        details = controls::VIEW_DETAILS,
        id = product.id,
        image = escape_html(&product.image),
        name = escape_html(&product.name),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use duka_commerce::{Currency, Money};

    #[test]
    fn test_strip_lists_each_product() {
        let a = Product::new(1, "Smart TV", Money::new(1, Currency::KES), "tvs").with_image("tv.jpg");
        let b = Product::new(2, "Radio", Money::new(1, Currency::KES), "audio");
        let html = render_recommendations(&[&a, &b]);
        assert!(html.starts_with("<h3>Recommended for You</h3>"));
        assert_eq!(html.matches(r#"class="product-small""#).count(), 2);
        assert!(html.contains(r#"<img src="tv.jpg" alt="Smart TV"><p>Smart TV</p>"#));
    }

    #[test]
    fn test_empty_strip_keeps_heading() {
        let html = render_recommendations(&[]);
        assert!(html.contains("Recommended for You"));
        assert!(!html.contains("product-small"));
    }
}
