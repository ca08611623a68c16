//! UI state as small enums with explicit transitions.

use std::time::{Duration, Instant};

use duka_commerce::catalog::CategoryFilter;
use duka_commerce::ProductId;
use serde::Serialize;

/// How long a toast stays visible.
pub const TOAST_DURATION: Duration = Duration::from_millis(2500);

/// Whether the cart sidebar is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CartPanel {
    Open,
    #[default]
    Closed,
}

impl CartPanel {
    pub fn open(self) -> Self {
        CartPanel::Open
    }

    pub fn close(self) -> Self {
        CartPanel::Closed
    }

    pub fn is_open(self) -> bool {
        self == CartPanel::Open
    }
}

/// The product detail modal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Modal {
    #[default]
    Hidden,
    Showing(ProductId),
}

impl Modal {
    pub fn show(self, id: ProductId) -> Self {
        Modal::Showing(id)
    }

    pub fn hide(self) -> Self {
        Modal::Hidden
    }

    pub fn product(self) -> Option<ProductId> {
        match self {
            Modal::Showing(id) => Some(id),
            Modal::Hidden => None,
        }
    }
}

/// Page colour scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggle(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }
}

/// The highlighted category button.
///
/// Only category selection moves it; searching leaves it where it was.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ActiveFilter(pub CategoryFilter);

impl ActiveFilter {
    pub fn select(self, filter: CategoryFilter) -> Self {
        ActiveFilter(filter)
    }

    pub fn filter(&self) -> &CategoryFilter {
        &self.0
    }

    pub fn is_active(&self, category: &str) -> bool {
        self.0.as_str() == category
    }
}

/// What the product grid is showing.
///
/// Search and category selection each replace the grid; whichever ran last
/// wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridView {
    Category(CategoryFilter),
    Search(String),
}

impl Default for GridView {
    fn default() -> Self {
        GridView::Category(CategoryFilter::All)
    }
}

/// Tone of a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ToastLevel {
    Success,
    Warning,
}

/// A transient notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub message: String,
    pub level: ToastLevel,
    pub raised_at: Instant,
}

impl Toast {
    pub fn success(message: impl Into<String>, raised_at: Instant) -> Self {
        Self {
            message: message.into(),
            level: ToastLevel::Success,
            raised_at,
        }
    }

    pub fn warning(message: impl Into<String>, raised_at: Instant) -> Self {
        Self {
            message: message.into(),
            level: ToastLevel::Warning,
            raised_at,
        }
    }

    /// Visible from `raised_at` until `duration` has elapsed.
    pub fn is_visible(&self, now: Instant, duration: Duration) -> bool {
        now.saturating_duration_since(self.raised_at) < duration
    }
}

/// All toggles and views of one storefront session.
#[derive(Debug, Clone, Default)]
pub struct UiState {
    pub cart_panel: CartPanel,
    pub modal: Modal,
    pub theme: Theme,
    pub active_filter: ActiveFilter,
    pub grid: GridView,
    pub toast: Option<Toast>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cart_panel_transitions() {
        let panel = CartPanel::default();
        assert!(!panel.is_open());
        assert!(panel.open().is_open());
        assert_eq!(panel.open().close(), CartPanel::Closed);
    }

    #[test]
    fn test_modal_transitions() {
        let modal = Modal::default().show(ProductId::new(4));
        assert_eq!(modal.product(), Some(ProductId::new(4)));
        assert_eq!(modal.show(ProductId::new(5)), Modal::Showing(ProductId::new(5)));
        assert_eq!(modal.hide().product(), None);
    }

    #[test]
    fn test_theme_toggle() {
        assert_eq!(Theme::Light.toggle(), Theme::Dark);
        assert_eq!(Theme::Light.toggle().toggle(), Theme::Light);
        assert!(Theme::Dark.is_dark());
    }

    #[test]
    fn test_active_filter_marks_one_button() {
        let active = ActiveFilter::default();
        assert!(active.is_active("all"));

        let active = active.select(CategoryFilter::from_button("phones"));
        assert!(active.is_active("phones"));
        assert!(!active.is_active("all"));
    }

    #[test]
    fn test_toast_visible_for_duration() {
        let raised = Instant::now();
        let toast = Toast::success("Radio added to cart!", raised);
        assert!(toast.is_visible(raised, TOAST_DURATION));
        assert!(toast.is_visible(raised + Duration::from_millis(2499), TOAST_DURATION));
        assert!(!toast.is_visible(raised + TOAST_DURATION, TOAST_DURATION));
    }
}
