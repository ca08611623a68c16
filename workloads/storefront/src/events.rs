//! Actions, store events and the listener registry.
//!
//! Renderers emit controls tagged with `data-action` (one of [`controls`])
//! and an optional `data-product-id` / `data-category` / input value. The
//! host maps a fired control back to an [`Action`] with
//! [`Action::from_control`] and hands it to `Storefront::dispatch`, which
//! answers with the [`RegionUpdate`]s to apply and notifies listeners.

use std::fmt;

use duka_commerce::catalog::CategoryFilter;
use duka_commerce::checkout::OrderReceipt;
use duka_commerce::{Money, ProductId};
use serde::Serialize;

use crate::ui::{CartPanel, Modal, Theme};

/// `data-action` attribute values.
pub mod controls {
    pub const ADD_TO_CART: &str = "add-to-cart";
    pub const VIEW_DETAILS: &str = "view-details";
    pub const DECREMENT: &str = "decrement";
    pub const INCREMENT: &str = "increment";
    pub const REMOVE: &str = "remove";
    pub const SEARCH: &str = "search";
    pub const FILTER: &str = "filter";
    pub const CLOSE_MODAL: &str = "close-modal";
    pub const OPEN_CART: &str = "open-cart";
    pub const CLOSE_CART: &str = "close-cart";
    pub const TOGGLE_THEME: &str = "toggle-theme";
    pub const PLACE_ORDER: &str = "place-order";
}

/// A user interaction the storefront can handle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    AddToCart(ProductId),
    ChangeQuantity { id: ProductId, delta: i64 },
    RemoveFromCart(ProductId),
    Search(String),
    SelectCategory(CategoryFilter),
    ViewDetails(ProductId),
    CloseModal,
    OpenCart,
    CloseCart,
    ToggleTheme,
    PlaceOrder,
}

impl Action {
    /// Map a fired control back to an action.
    ///
    /// `target` is the control's product id, category, or input value,
    /// depending on the control. Returns `None` for unknown controls and for
    /// product controls whose id does not parse.
    pub fn from_control(action: &str, target: Option<&str>) -> Option<Action> {
        let product_id = || target.and_then(|t| t.parse::<ProductId>().ok());

        match action {
            controls::ADD_TO_CART => product_id().map(Action::AddToCart),
            controls::VIEW_DETAILS => product_id().map(Action::ViewDetails),
            controls::DECREMENT => product_id().map(|id| Action::ChangeQuantity { id, delta: -1 }),
            controls::INCREMENT => product_id().map(|id| Action::ChangeQuantity { id, delta: 1 }),
            controls::REMOVE => product_id().map(Action::RemoveFromCart),
            controls::SEARCH => Some(Action::Search(target.unwrap_or_default().to_string())),
            controls::FILTER => target.map(|c| Action::SelectCategory(CategoryFilter::from_button(c))),
            controls::CLOSE_MODAL => Some(Action::CloseModal),
            controls::OPEN_CART => Some(Action::OpenCart),
            controls::CLOSE_CART => Some(Action::CloseCart),
            controls::TOGGLE_THEME => Some(Action::ToggleTheme),
            controls::PLACE_ORDER => Some(Action::PlaceOrder),
            _ => None,
        }
    }
}

/// A named insertion point in the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Region {
    ProductList,
    Recommendations,
    FilterBar,
    CartSidebar,
    CartItems,
    CartTotal,
    CartCount,
    ProductModal,
    ModalContent,
    Toast,
    Body,
}

impl Region {
    /// The element id of the region (`body` for the document body).
    pub fn element_id(&self) -> &'static str {
        match self {
            Region::ProductList => "product-list",
            Region::Recommendations => "recommendations",
            Region::FilterBar => "category-filters",
            Region::CartSidebar => "cart-sidebar",
            Region::CartItems => "cart-items",
            Region::CartTotal => "cart-total",
            Region::CartCount => "cart-count",
            Region::ProductModal => "product-modal",
            Region::ModalContent => "modal-content",
            Region::Toast => "toast",
            Region::Body => "body",
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.element_id())
    }
}

/// A change the host applies to the page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum RegionUpdate {
    /// Replace the inner markup of a region.
    Replace { region: Region, html: String },
    /// Add or remove a class on a region's element.
    SetClass {
        region: Region,
        class: &'static str,
        enabled: bool,
    },
}

impl RegionUpdate {
    pub fn replace(region: Region, html: impl Into<String>) -> Self {
        RegionUpdate::Replace {
            region,
            html: html.into(),
        }
    }

    pub fn set_class(region: Region, class: &'static str, enabled: bool) -> Self {
        RegionUpdate::SetClass {
            region,
            class,
            enabled,
        }
    }

    /// The region this update targets.
    pub fn region(&self) -> Region {
        match self {
            RegionUpdate::Replace { region, .. } | RegionUpdate::SetClass { region, .. } => *region,
        }
    }
}

/// Kinds of [`StoreEvent`] a listener can register for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    CartChanged,
    OrderPlaced,
    OrderRejected,
    ViewChanged,
    ModalChanged,
    CartPanelChanged,
    ThemeChanged,
    ToastRaised,
}

/// Something that happened in the storefront.
#[derive(Debug, Clone, PartialEq)]
pub enum StoreEvent {
    /// The cart contents changed.
    CartChanged { count: i64, total: Money },
    /// An order was placed.
    OrderPlaced(OrderReceipt),
    /// An order was attempted on an empty cart.
    OrderRejected,
    /// The product grid now shows `shown` products.
    ViewChanged { shown: usize },
    ModalChanged(Modal),
    CartPanelChanged(CartPanel),
    ThemeChanged(Theme),
    ToastRaised(String),
}

impl StoreEvent {
    pub fn kind(&self) -> EventKind {
        match self {
            StoreEvent::CartChanged { .. } => EventKind::CartChanged,
            StoreEvent::OrderPlaced(_) => EventKind::OrderPlaced,
            StoreEvent::OrderRejected => EventKind::OrderRejected,
            StoreEvent::ViewChanged { .. } => EventKind::ViewChanged,
            StoreEvent::ModalChanged(_) => EventKind::ModalChanged,
            StoreEvent::CartPanelChanged(_) => EventKind::CartPanelChanged,
            StoreEvent::ThemeChanged(_) => EventKind::ThemeChanged,
            StoreEvent::ToastRaised(_) => EventKind::ToastRaised,
        }
    }
}

/// Handle returned by [`Listeners::on`], used to unregister.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u32);

type Listener = Box<dyn FnMut(&StoreEvent)>;

/// Observers keyed by event kind, notified in registration order.
#[derive(Default)]
pub struct Listeners {
    next_id: u32,
    entries: Vec<(ListenerId, EventKind, Listener)>,
}

impl Listeners {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `listener` for events of `kind`.
    pub fn on(&mut self, kind: EventKind, listener: impl FnMut(&StoreEvent) + 'static) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id = self.next_id.wrapping_add(1);
        self.entries.push((id, kind, Box::new(listener)));
        id
    }

    /// Unregister a listener. Returns whether it was registered.
    pub fn off(&mut self, id: ListenerId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry_id, _, _)| *entry_id != id);
        self.entries.len() < before
    }

    /// Deliver `event` to every listener registered for its kind.
    pub fn emit(&mut self, event: &StoreEvent) {
        let kind = event.kind();
        for (_, entry_kind, listener) in self.entries.iter_mut() {
            if *entry_kind == kind {
                listener(event);
            }
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Debug for Listeners {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Listeners")
            .field("count", &self.entries.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_from_control_product_actions() {
        assert_eq!(
            Action::from_control("add-to-cart", Some("7")),
            Some(Action::AddToCart(ProductId::new(7)))
        );
        assert_eq!(
            Action::from_control("decrement", Some("7")),
            Some(Action::ChangeQuantity {
                id: ProductId::new(7),
                delta: -1
            })
        );
        assert_eq!(
            Action::from_control("remove", Some(" 3 ")),
            Some(Action::RemoveFromCart(ProductId::new(3)))
        );
        assert_eq!(Action::from_control("view-details", Some("abc")), None);
        assert_eq!(Action::from_control("add-to-cart", None), None);
    }

    #[test]
    fn test_from_control_page_actions() {
        assert_eq!(
            Action::from_control("filter", Some("all")),
            Some(Action::SelectCategory(CategoryFilter::All))
        );
        assert_eq!(
            Action::from_control("search", Some("Phone")),
            Some(Action::Search("Phone".to_string()))
        );
        assert_eq!(
            Action::from_control("search", None),
            Some(Action::Search(String::new()))
        );
        assert_eq!(Action::from_control("toggle-theme", None), Some(Action::ToggleTheme));
        assert_eq!(Action::from_control("explode", None), None);
    }

    #[test]
    fn test_listeners_receive_only_their_kind() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut listeners = Listeners::new();

        let sink = Rc::clone(&seen);
        listeners.on(EventKind::ThemeChanged, move |event| {
            sink.borrow_mut().push(event.clone());
        });

        listeners.emit(&StoreEvent::OrderRejected);
        listeners.emit(&StoreEvent::ThemeChanged(Theme::Dark));

        assert_eq!(*seen.borrow(), vec![StoreEvent::ThemeChanged(Theme::Dark)]);
    }

    #[test]
    fn test_off_unregisters() {
        let calls = Rc::new(RefCell::new(0));
        let mut listeners = Listeners::new();

        let counter = Rc::clone(&calls);
        let id = listeners.on(EventKind::OrderRejected, move |_| *counter.borrow_mut() += 1);
        listeners.emit(&StoreEvent::OrderRejected);
        assert!(listeners.off(id));
        assert!(!listeners.off(id));
        listeners.emit(&StoreEvent::OrderRejected);

        assert_eq!(*calls.borrow(), 1);
        assert!(listeners.is_empty());
    }

    #[test]
    fn test_region_update_serializes_with_element_names() {
        let update = RegionUpdate::set_class(Region::CartSidebar, "open", true);
        let json = serde_json::to_value(&update).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"op": "set_class", "region": "cart-sidebar", "class": "open", "enabled": true})
        );
        assert_eq!(update.region().element_id(), "cart-sidebar");
    }
}
