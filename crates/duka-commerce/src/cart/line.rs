//! Cart line type.

use crate::catalog::Product;
use crate::ids::ProductId;
use crate::money::{self, Money};
use serde::{Deserialize, Serialize};

/// One product's accumulated quantity in the cart.
///
/// `name`, `price` and `image` are snapshots taken when the product was
/// first added; later catalog changes do not affect them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartLine {
    /// Product this line refers to.
    pub id: ProductId,
    /// Product name at add-time.
    pub name: String,
    /// Unit price at add-time.
    #[serde(with = "money::as_decimal")]
    pub price: Money,
    /// Image URL at add-time.
    pub image: String,
    /// Quantity, always positive while the line is in a cart.
    pub quantity: i64,
}

impl CartLine {
    /// Snapshot a product into a new line with quantity 1.
    pub fn from_product(product: &Product) -> Self {
        Self {
            id: product.id,
            name: product.name.clone(),
            price: product.price,
            image: product.image.clone(),
            quantity: 1,
        }
    }

    /// `price * quantity`, saturating instead of overflowing.
    pub fn line_total(&self) -> Money {
        Money::new(
            self.price.amount_cents.saturating_mul(self.quantity),
            self.price.currency,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Currency;

    #[test]
    fn test_snapshot_copies_display_fields() {
        let product = Product::new(9, "Radio", Money::new(250_000, Currency::KES), "audio")
            .with_image("img/radio.png")
            .with_stock(3);
        let line = CartLine::from_product(&product);
        assert_eq!(line.id, product.id);
        assert_eq!(line.name, "Radio");
        assert_eq!(line.image, "img/radio.png");
        assert_eq!(line.quantity, 1);
    }

    #[test]
    fn test_persisted_shape() {
        let line = CartLine {
            id: ProductId::new(1),
            name: "Radio".to_string(),
            price: Money::new(250_050, Currency::KES),
            image: "r.png".to_string(),
            quantity: 2,
        };
        let value = serde_json::to_value(&line).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"id": 1, "name": "Radio", "price": 2500.5, "image": "r.png", "quantity": 2})
        );
        assert_eq!(line.line_total().amount_cents, 500_100);
    }
}
