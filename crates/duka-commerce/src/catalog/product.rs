//! Product type as served by the catalog endpoint.

use crate::ids::ProductId;
use crate::money::{self, Money};
use serde::{Deserialize, Serialize};

/// Rating shown when the catalog omits one.
pub const DEFAULT_RATING: f64 = 4.0;

/// Number of symbols in a star rating.
pub const MAX_STARS: u8 = 5;

/// A product in the catalog.
///
/// Products are read-only once loaded; the cart copies the fields it needs
/// rather than holding references.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Product name.
    pub name: String,
    /// Unit price.
    #[serde(with = "money::as_decimal")]
    pub price: Money,
    /// Image URL.
    pub image: String,
    /// Category name used by the filter buttons.
    pub category: String,
    /// Units in stock.
    pub stock: u32,
    /// Average rating, usually 0..=5.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
}

impl Product {
    /// Create a product with no explicit rating.
    pub fn new(
        id: u64,
        name: impl Into<String>,
        price: Money,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id: ProductId::new(id),
            name: name.into(),
            price,
            image: String::new(),
            category: category.into(),
            stock: 0,
            rating: None,
        }
    }

    /// Set the image URL.
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }

    /// Set the stock level.
    pub fn with_stock(mut self, stock: u32) -> Self {
        self.stock = stock;
        self
    }

    /// Set the rating.
    pub fn with_rating(mut self, rating: f64) -> Self {
        self.rating = Some(rating);
        self
    }

    /// Rating with the catalog default applied.
    pub fn effective_rating(&self) -> f64 {
        self.rating.unwrap_or(DEFAULT_RATING)
    }

    /// Number of filled stars, clamped to `0..=MAX_STARS`.
    pub fn filled_stars(&self) -> u8 {
        let rating = self.effective_rating();
        if rating.is_nan() {
            return 0;
        }
        rating.floor().clamp(0.0, f64::from(MAX_STARS)) as u8
    }

    /// Whether any units are available.
    pub fn in_stock(&self) -> bool {
        self.stock > 0
    }

    /// Stock availability text for the detail view.
    pub fn stock_text(&self) -> String {
        if self.in_stock() {
            format!("{} available", self.stock)
        } else {
            "Out of stock".to_string()
        }
    }

    /// Descriptive sentence for the detail view.
    pub fn description(&self) -> String {
        format!(
            "High-quality {} perfect for your electronics needs.",
            self.name.to_lowercase()
        )
    }

    /// Case-insensitive substring match on the product name.
    pub fn name_matches(&self, term: &str) -> bool {
        self.name.to_lowercase().contains(&term.to_lowercase())
    }
}
