//! Order receipt produced by placing an order.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::cart::CartLine;
use crate::money::Money;

/// Summary of a placed order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderReceipt {
    /// Human-facing order number.
    pub order_number: String,
    /// Lines as they were in the cart.
    pub lines: Vec<CartLine>,
    /// Order total.
    pub total: Money,
    /// When the order was placed.
    pub placed_at: DateTime<Utc>,
}

impl OrderReceipt {
    /// Build a receipt for `lines` placed at `placed_at`.
    pub fn new(lines: Vec<CartLine>, total: Money, placed_at: DateTime<Utc>) -> Self {
        Self {
            order_number: Self::order_number_for(placed_at),
            lines,
            total,
            placed_at,
        }
    }

    /// Generate an order number from the placement time.
    pub fn order_number_for(placed_at: DateTime<Utc>) -> String {
        format!("ORD-{}", placed_at.format("%Y%m%d-%H%M%S"))
    }

    /// Get total item count.
    pub fn item_count(&self) -> i64 {
        self.lines
            .iter()
            .fold(0_i64, |acc, l| acc.saturating_add(l.quantity))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::ProductId;
    use crate::money::Currency;
    use chrono::TimeZone;

    #[test]
    fn test_order_number_from_timestamp() {
        let at = Utc.with_ymd_and_hms(2024, 3, 9, 14, 5, 0).unwrap();
        assert_eq!(OrderReceipt::order_number_for(at), "ORD-20240309-140500");
    }

    #[test]
    fn test_item_count() {
        let line = CartLine {
            id: ProductId::new(1),
            name: "Radio".to_string(),
            price: Money::new(100, Currency::KES),
            image: String::new(),
            quantity: 3,
        };
        let receipt = OrderReceipt::new(vec![line], Money::new(300, Currency::KES), Utc::now());
        assert_eq!(receipt.item_count(), 3);
    }

    #[test]
    fn test_item_count_saturates() {
        let line = |id, quantity| CartLine {
            id: ProductId::new(id),
            name: "Radio".to_string(),
            price: Money::new(100, Currency::KES),
            image: String::new(),
            quantity,
        };
        let receipt = OrderReceipt::new(
            vec![line(1, i64::MAX), line(2, 1)],
            Money::new(i64::MAX, Currency::KES),
            Utc::now(),
        );
        assert_eq!(receipt.item_count(), i64::MAX);
    }
}
