//! Cart store mirrored to durable storage.

use chrono::Utc;
use duka_cache::{Cache, CacheError, KeyValueStore};
use duka_observability::StructuredLogger;

use crate::cart::CartLine;
use crate::catalog::CatalogStore;
use crate::checkout::OrderReceipt;
use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::money::Money;

/// Storage key of the persisted cart.
pub const CART_KEY: &str = "cart";

/// Outcome of [`CartStore::change_quantity`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuantityChange {
    /// No line with that id; nothing changed.
    Missing,
    /// The line now has this quantity.
    Updated(i64),
    /// The quantity dropped to zero or below and the line was removed.
    Removed,
}

/// The shopping cart.
///
/// Lines keep first-added-first order and there is at most one line per
/// product id. Every mutation rewrites the durable slot before returning.
#[derive(Debug)]
pub struct CartStore<S: KeyValueStore> {
    lines: Vec<CartLine>,
    cache: Cache<S>,
    key: String,
    logger: StructuredLogger,
}

impl<S: KeyValueStore> CartStore<S> {
    /// Restore the cart from `store` under [`CART_KEY`].
    pub fn open(store: S, logger: &StructuredLogger) -> Self {
        Self::open_with_key(store, CART_KEY, logger)
    }

    /// Restore the cart from `store` under a custom key.
    ///
    /// A missing value yields an empty cart. An unreadable or malformed value
    /// is logged and also yields an empty cart; it is overwritten by the next
    /// mutation.
    pub fn open_with_key(store: S, key: impl Into<String>, logger: &StructuredLogger) -> Self {
        let key = key.into();
        let logger = logger.for_component("cart");
        let cache = Cache::new(store);

        let lines = match cache.get::<Vec<CartLine>>(&key) {
            Ok(Some(lines)) => {
                let restored = lines.len();
                let lines = normalize(lines);
                if lines.len() != restored {
                    logger
                        .warn_builder("Dropped invalid persisted cart lines")
                        .field_i64("restored", restored as i64)
                        .field_i64("kept", lines.len() as i64)
                        .emit();
                }
                lines
            }
            Ok(None) => Vec::new(),
            Err(e) => {
                let reason = match e {
                    CacheError::SerializeError(_) => "malformed",
                    _ => "unreadable",
                };
                logger
                    .warn_builder("Ignoring persisted cart")
                    .field("reason", reason)
                    .field("error", e.to_string())
                    .emit();
                Vec::new()
            }
        };

        logger
            .debug_builder("Cart restored")
            .field_i64("lines", lines.len() as i64)
            .emit();

        Self {
            lines,
            cache,
            key,
            logger,
        }
    }

    /// Add one unit of a catalog product.
    ///
    /// Returns the updated line, or `None` when the id is not in the catalog
    /// (nothing changes and nothing is written).
    pub fn add_to_cart(
        &mut self,
        catalog: &CatalogStore,
        product_id: ProductId,
    ) -> Result<Option<CartLine>, CommerceError> {
        let Some(product) = catalog.find(product_id) else {
            return Ok(None);
        };

        let mut lines = self.lines.clone();
        let line = match lines.iter_mut().find(|l| l.id == product_id) {
            Some(existing) => {
                existing.quantity = existing.quantity.saturating_add(1);
                existing.clone()
            }
            None => {
                let line = CartLine::from_product(product);
                lines.push(line.clone());
                line
            }
        };

        self.commit(lines)?;
        self.logger
            .debug_builder("Added to cart")
            .field_i64("product_id", product_id.get() as i64)
            .field_i64("quantity", line.quantity)
            .emit();
        Ok(Some(line))
    }

    /// Adjust a line's quantity by `delta`, removing it at zero or below.
    pub fn change_quantity(
        &mut self,
        id: ProductId,
        delta: i64,
    ) -> Result<QuantityChange, CommerceError> {
        let Some(position) = self.lines.iter().position(|l| l.id == id) else {
            return Ok(QuantityChange::Missing);
        };

        let mut lines = self.lines.clone();
        let quantity = lines[position].quantity.saturating_add(delta);
        let change = if quantity <= 0 {
            lines.remove(position);
            QuantityChange::Removed
        } else {
            lines[position].quantity = quantity;
            QuantityChange::Updated(quantity)
        };

        self.commit(lines)?;
        Ok(change)
    }

    /// Remove the line for `id`. Returns whether a line was removed.
    pub fn remove_from_cart(&mut self, id: ProductId) -> Result<bool, CommerceError> {
        if self.get(id).is_none() {
            return Ok(false);
        }

        let lines = self.lines.iter().filter(|l| l.id != id).cloned().collect();
        self.commit(lines)?;
        Ok(true)
    }

    /// Place the order: clear the cart and delete the durable slot.
    ///
    /// An empty cart fails with [`CommerceError::EmptyCart`] and changes
    /// nothing.
    pub fn place_order(&mut self) -> Result<OrderReceipt, CommerceError> {
        if self.lines.is_empty() {
            return Err(CommerceError::EmptyCart);
        }

        self.cache.delete(&self.key)?;
        let total = self.total();
        let lines = std::mem::take(&mut self.lines);
        let receipt = OrderReceipt::new(lines, total, Utc::now());

        self.logger
            .info_builder("Order placed")
            .field("order_number", receipt.order_number.clone())
            .field_i64("items", receipt.item_count())
            .field("total", receipt.total.display())
            .emit();
        Ok(receipt)
    }

    /// Sum of `price * quantity` over all lines.
    pub fn total(&self) -> Money {
        let currency = self
            .lines
            .first()
            .map(|l| l.price.currency)
            .unwrap_or_default();
        let cents = self
            .lines
            .iter()
            .fold(0_i64, |acc, l| acc.saturating_add(l.line_total().amount_cents));
        Money::new(cents, currency)
    }

    /// Sum of quantities, shown on the cart badge.
    pub fn count(&self) -> i64 {
        self.lines
            .iter()
            .fold(0_i64, |acc, l| acc.saturating_add(l.quantity))
    }

    /// Lines in first-added order.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Get the line for a product.
    pub fn get(&self, id: ProductId) -> Option<&CartLine> {
        self.lines.iter().find(|l| l.id == id)
    }

    /// Check if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Borrow the underlying store.
    pub fn store(&self) -> &S {
        self.cache.store()
    }

    /// Write `lines` to the durable slot, then adopt them. A failed write
    /// leaves the cart as it was.
    fn commit(&mut self, lines: Vec<CartLine>) -> Result<(), CommerceError> {
        self.cache.set(&self.key, &lines)?;
        self.lines = lines;
        Ok(())
    }
}

/// Enforce the cart invariants on restored data: positive quantities and one
/// line per product id (later duplicates fold into the first).
fn normalize(lines: Vec<CartLine>) -> Vec<CartLine> {
    let mut kept: Vec<CartLine> = Vec::with_capacity(lines.len());
    for line in lines.into_iter().filter(|l| l.quantity > 0) {
        match kept.iter_mut().find(|k| k.id == line.id) {
            Some(existing) => existing.quantity = existing.quantity.saturating_add(line.quantity),
            None => kept.push(line),
        }
    }
    kept
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Product;
    use crate::money::Currency;
    use duka_cache::MemoryStore;
    use std::cell::Cell;
    use std::rc::Rc;

    /// Memory store whose writes start failing once `broken` is set.
    #[derive(Debug, Default)]
    struct BrittleStore {
        inner: MemoryStore,
        broken: Rc<Cell<bool>>,
    }

    impl BrittleStore {
        fn check(&self) -> Result<(), CacheError> {
            if self.broken.get() {
                Err(CacheError::StoreError("disk full".to_string()))
            } else {
                Ok(())
            }
        }
    }

    impl KeyValueStore for BrittleStore {
        fn get(&self, key: &str) -> Result<Option<String>, CacheError> {
            self.inner.get(key)
        }

        fn set(&mut self, key: &str, value: &str) -> Result<(), CacheError> {
            self.check()?;
            self.inner.set(key, value)
        }

        fn delete(&mut self, key: &str) -> Result<(), CacheError> {
            self.check()?;
            self.inner.delete(key)
        }

        fn keys(&self) -> Result<Vec<String>, CacheError> {
            self.inner.keys()
        }
    }

    fn catalog() -> CatalogStore {
        CatalogStore::from_products(vec![
            Product::new(1, "Smart TV", Money::new(100_000, Currency::KES), "tvs")
                .with_image("tv.png")
                .with_stock(5),
            Product::new(2, "Speaker", Money::new(50_000, Currency::KES), "audio")
                .with_image("speaker.png")
                .with_stock(0),
        ])
    }

    fn empty_cart() -> CartStore<MemoryStore> {
        CartStore::open(MemoryStore::new(), &StructuredLogger::disabled())
    }

    fn reload(cart: &CartStore<MemoryStore>) -> CartStore<MemoryStore> {
        CartStore::open(cart.store().clone(), &StructuredLogger::disabled())
    }

    fn quantities<S: KeyValueStore>(cart: &CartStore<S>) -> Vec<(u64, i64)> {
        cart.lines().iter().map(|l| (l.id.get(), l.quantity)).collect()
    }

    #[test]
    fn test_add_scenario_totals_2500() {
        let catalog = catalog();
        let mut cart = empty_cart();

        cart.add_to_cart(&catalog, ProductId::new(1)).unwrap();
        cart.add_to_cart(&catalog, ProductId::new(1)).unwrap();
        cart.add_to_cart(&catalog, ProductId::new(2)).unwrap();

        assert_eq!(quantities(&cart), vec![(1, 2), (2, 1)]);
        assert_eq!(cart.total(), Money::new(250_000, Currency::KES));
        assert_eq!(cart.total().display(), "Ksh 2,500.00");
        assert_eq!(cart.count(), 3);
    }

    #[test]
    fn test_one_line_per_id_with_add_count() {
        let catalog = catalog();
        let mut cart = empty_cart();
        let sequence = [2, 1, 2, 2, 1, 2];
        for id in sequence {
            cart.add_to_cart(&catalog, ProductId::new(id)).unwrap();
        }
        assert_eq!(quantities(&cart), vec![(2, 4), (1, 2)]);
    }

    #[test]
    fn test_add_unknown_product_is_silent_noop() {
        let mut cart = empty_cart();
        let added = cart.add_to_cart(&catalog(), ProductId::new(42)).unwrap();
        assert!(added.is_none());
        assert!(cart.is_empty());
        assert!(!cart.store().exists(CART_KEY).unwrap());
    }

    #[test]
    fn test_add_snapshots_product_fields() {
        let mut catalog_v1 = catalog();
        let mut cart = empty_cart();
        cart.add_to_cart(&catalog_v1, ProductId::new(1)).unwrap();

        catalog_v1 = CatalogStore::from_products(vec![Product::new(
            1,
            "Smart TV 2",
            Money::new(999_900, Currency::KES),
            "tvs",
        )]);
        cart.add_to_cart(&catalog_v1, ProductId::new(1)).unwrap();

        let line = cart.get(ProductId::new(1)).unwrap();
        assert_eq!(line.name, "Smart TV");
        assert_eq!(line.price.amount_cents, 100_000);
        assert_eq!(line.quantity, 2);
    }

    #[test]
    fn test_change_quantity_to_zero_removes_line() {
        let mut cart = empty_cart();
        cart.add_to_cart(&catalog(), ProductId::new(1)).unwrap();

        let change = cart.change_quantity(ProductId::new(1), -1).unwrap();
        assert_eq!(change, QuantityChange::Removed);
        assert!(cart.is_empty());

        let persisted = cart.store().get(CART_KEY).unwrap();
        assert_eq!(persisted.as_deref(), Some("[]"));
    }

    #[test]
    fn test_change_quantity_by_negative_current_removes() {
        let catalog = catalog();
        let mut cart = empty_cart();
        for _ in 0..4 {
            cart.add_to_cart(&catalog, ProductId::new(1)).unwrap();
        }
        let current = cart.get(ProductId::new(1)).unwrap().quantity;
        assert_eq!(
            cart.change_quantity(ProductId::new(1), -current).unwrap(),
            QuantityChange::Removed
        );
        assert!(cart.get(ProductId::new(1)).is_none());
    }

    #[test]
    fn test_change_quantity_accepts_any_delta() {
        let mut cart = empty_cart();
        cart.add_to_cart(&catalog(), ProductId::new(1)).unwrap();

        assert_eq!(
            cart.change_quantity(ProductId::new(1), 5).unwrap(),
            QuantityChange::Updated(6)
        );
        assert_eq!(
            cart.change_quantity(ProductId::new(1), -10).unwrap(),
            QuantityChange::Removed
        );
        assert_eq!(
            cart.change_quantity(ProductId::new(1), 1).unwrap(),
            QuantityChange::Missing
        );
    }

    #[test]
    fn test_remove_from_cart() {
        let catalog = catalog();
        let mut cart = empty_cart();
        cart.add_to_cart(&catalog, ProductId::new(1)).unwrap();
        cart.add_to_cart(&catalog, ProductId::new(2)).unwrap();

        assert!(cart.remove_from_cart(ProductId::new(1)).unwrap());
        assert!(!cart.remove_from_cart(ProductId::new(1)).unwrap());
        assert_eq!(quantities(&cart), vec![(2, 1)]);
    }

    #[test]
    fn test_persisted_state_round_trips_after_each_mutation() {
        let catalog = catalog();
        let mut cart = empty_cart();

        cart.add_to_cart(&catalog, ProductId::new(2)).unwrap();
        assert_eq!(reload(&cart).lines(), cart.lines());

        cart.add_to_cart(&catalog, ProductId::new(1)).unwrap();
        cart.add_to_cart(&catalog, ProductId::new(1)).unwrap();
        assert_eq!(reload(&cart).lines(), cart.lines());

        cart.change_quantity(ProductId::new(1), -1).unwrap();
        assert_eq!(reload(&cart).lines(), cart.lines());

        cart.remove_from_cart(ProductId::new(2)).unwrap();
        assert_eq!(reload(&cart).lines(), cart.lines());
        assert_eq!(quantities(&reload(&cart)), vec![(1, 1)]);
    }

    #[test]
    fn test_place_order_on_empty_cart_fails_without_change() {
        let mut cart = empty_cart();
        let result = cart.place_order();
        assert!(matches!(result, Err(CommerceError::EmptyCart)));
        assert!(cart.is_empty());
        assert_eq!(CommerceError::EmptyCart.to_string(), "Your cart is empty!");
    }

    #[test]
    fn test_place_order_clears_and_removes_slot() {
        let catalog = catalog();
        let mut cart = empty_cart();
        cart.add_to_cart(&catalog, ProductId::new(1)).unwrap();
        cart.add_to_cart(&catalog, ProductId::new(2)).unwrap();

        let receipt = cart.place_order().unwrap();
        assert_eq!(receipt.item_count(), 2);
        assert_eq!(receipt.total.amount_cents, 150_000);
        assert!(cart.is_empty());
        assert!(!cart.store().exists(CART_KEY).unwrap());
        assert!(reload(&cart).is_empty());
    }

    #[test]
    fn test_malformed_persisted_cart_opens_empty() {
        let (logger, lines) = StructuredLogger::in_memory();
        let cart = CartStore::open(MemoryStore::with_entry(CART_KEY, "{not json"), &logger);
        assert!(cart.is_empty());
        let lines = lines.lock().unwrap();
        assert!(lines.iter().any(|l| l.starts_with("[WARN] cart: Ignoring persisted cart")));
    }

    #[test]
    fn test_restored_cart_is_normalized() {
        let stored = r#"[
            {"id": 1, "name": "Smart TV", "price": 1000, "image": "tv.png", "quantity": 1},
            {"id": 2, "name": "Speaker", "price": 500, "image": "s.png", "quantity": 0},
            {"id": 1, "name": "Smart TV", "price": 1000, "image": "tv.png", "quantity": 2}
        ]"#;
        let cart = CartStore::open(
            MemoryStore::with_entry(CART_KEY, stored),
            &StructuredLogger::disabled(),
        );
        assert_eq!(quantities(&cart), vec![(1, 3)]);
    }

    #[test]
    fn test_failed_write_leaves_cart_unchanged() {
        let catalog = catalog();
        let broken = Rc::new(Cell::new(false));
        let store = BrittleStore {
            inner: MemoryStore::new(),
            broken: Rc::clone(&broken),
        };
        let mut cart = CartStore::open(store, &StructuredLogger::disabled());
        cart.add_to_cart(&catalog, ProductId::new(1)).unwrap();
        let saved = cart.store().get(CART_KEY).unwrap();

        broken.set(true);
        assert!(matches!(
            cart.add_to_cart(&catalog, ProductId::new(1)),
            Err(CommerceError::Storage(_))
        ));
        assert!(matches!(
            cart.add_to_cart(&catalog, ProductId::new(2)),
            Err(CommerceError::Storage(_))
        ));
        assert!(cart.change_quantity(ProductId::new(1), 4).is_err());
        assert!(cart.change_quantity(ProductId::new(1), -1).is_err());
        assert!(cart.remove_from_cart(ProductId::new(1)).is_err());
        assert!(cart.place_order().is_err());

        assert_eq!(quantities(&cart), vec![(1, 1)]);
        assert_eq!(cart.store().get(CART_KEY).unwrap(), saved);

        broken.set(false);
        cart.add_to_cart(&catalog, ProductId::new(1)).unwrap();
        assert_eq!(quantities(&cart), vec![(1, 2)]);
    }

    #[test]
    fn test_count_saturates_at_max_quantity() {
        let catalog = catalog();
        let mut cart = empty_cart();
        cart.add_to_cart(&catalog, ProductId::new(1)).unwrap();
        assert_eq!(
            cart.change_quantity(ProductId::new(1), i64::MAX).unwrap(),
            QuantityChange::Updated(i64::MAX)
        );
        cart.add_to_cart(&catalog, ProductId::new(2)).unwrap();

        assert_eq!(cart.count(), i64::MAX);
        assert_eq!(cart.place_order().unwrap().item_count(), i64::MAX);
    }
}
