//! The storefront controller.
//!
//! Owns the catalog, the cart, the UI toggles and the listener registry.
//! Every interaction goes through [`Storefront::dispatch`], which mutates
//! state, re-renders the affected regions and notifies listeners.

use std::time::{Duration, Instant};

use duka_cache::KeyValueStore;
use duka_commerce::cart::{CartStore, QuantityChange};
use duka_commerce::catalog::{CatalogState, CatalogStore, CategoryFilter, Product, DEFAULT_RECOMMENDATIONS};
use duka_commerce::{CommerceError, ProductId};
use duka_observability::StructuredLogger;
use rand::Rng;

use crate::events::{Action, EventKind, ListenerId, Listeners, Region, RegionUpdate, StoreEvent};
use crate::page::{PageView, Shell};
use crate::sections::{
    render_cart_count, render_cart_items, render_cart_total, render_catalog_unavailable,
    render_filter_bar, render_modal_content, render_product_grid, render_recommendations,
    render_toast, toast_class,
};
use crate::ui::{GridView, Toast, ToastLevel, UiState, TOAST_DURATION};

/// Toast shown after a successful order.
pub const ORDER_PLACED_MESSAGE: &str = "✅ Order placed successfully!";

/// Tunables for a storefront session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StorefrontSettings {
    /// How long a toast stays visible.
    pub toast_duration: Duration,
    /// Size of the recommendation strip.
    pub recommendation_count: usize,
}

impl Default for StorefrontSettings {
    fn default() -> Self {
        Self {
            toast_duration: TOAST_DURATION,
            recommendation_count: DEFAULT_RECOMMENDATIONS,
        }
    }
}

/// One storefront session over a durable store `S`.
#[derive(Debug)]
pub struct Storefront<S: KeyValueStore> {
    catalog: CatalogStore,
    cart: CartStore<S>,
    ui: UiState,
    listeners: Listeners,
    recommended: Vec<ProductId>,
    settings: StorefrontSettings,
    shell: Shell,
    logger: StructuredLogger,
}

impl<S: KeyValueStore> Storefront<S> {
    /// Create a storefront over a loaded catalog and a restored cart.
    pub fn new(catalog: CatalogStore, cart: CartStore<S>, logger: &StructuredLogger) -> Self {
        let mut storefront = Self {
            catalog,
            cart,
            ui: UiState::default(),
            listeners: Listeners::new(),
            recommended: Vec::new(),
            settings: StorefrontSettings::default(),
            shell: Shell::storefront(),
            logger: logger.for_component("storefront"),
        };
        storefront.reshuffle_recommendations(&mut rand::thread_rng());
        storefront
    }

    /// Replace the session settings.
    pub fn with_settings(mut self, settings: StorefrontSettings) -> Self {
        self.settings = settings;
        self.reshuffle_recommendations(&mut rand::thread_rng());
        self
    }

    pub fn catalog(&self) -> &CatalogStore {
        &self.catalog
    }

    pub fn cart(&self) -> &CartStore<S> {
        &self.cart
    }

    pub fn ui(&self) -> &UiState {
        &self.ui
    }

    pub fn settings(&self) -> &StorefrontSettings {
        &self.settings
    }

    /// Register a listener for one kind of [`StoreEvent`].
    pub fn on(&mut self, kind: EventKind, listener: impl FnMut(&StoreEvent) + 'static) -> ListenerId {
        self.listeners.on(kind, listener)
    }

    /// Unregister a listener.
    pub fn off(&mut self, id: ListenerId) -> bool {
        self.listeners.off(id)
    }

    /// Handle an action at the current time.
    pub fn dispatch(&mut self, action: Action) -> Result<Vec<RegionUpdate>, CommerceError> {
        self.dispatch_at(action, Instant::now())
    }

    /// Handle an action, stamping any toast with `now`.
    ///
    /// Only durable-storage failures are errors. Unknown ids are no-ops and
    /// produce no updates; an order on an empty cart raises a warning toast.
    pub fn dispatch_at(
        &mut self,
        action: Action,
        now: Instant,
    ) -> Result<Vec<RegionUpdate>, CommerceError> {
        let mut updates = Vec::new();
        let mut events = Vec::new();

        match &action {
            Action::AddToCart(id) => {
                if let Some(line) = self.cart.add_to_cart(&self.catalog, *id)? {
                    updates.extend(self.cart_updates());
                    self.open_cart(&mut updates, &mut events);
                    events.push(self.cart_changed());
                    let message = format!("{} added to cart!", line.name);
                    self.raise_toast(Toast::success(message, now), now, &mut updates, &mut events);
                }
            }
            Action::ChangeQuantity { id, delta } => {
                if self.cart.change_quantity(*id, *delta)? != QuantityChange::Missing {
                    updates.extend(self.cart_updates());
                    events.push(self.cart_changed());
                }
            }
            Action::RemoveFromCart(id) => {
                if self.cart.remove_from_cart(*id)? {
                    updates.extend(self.cart_updates());
                    events.push(self.cart_changed());
                }
            }
            Action::Search(term) => {
                self.ui.grid = GridView::Search(term.clone());
                updates.push(RegionUpdate::replace(Region::ProductList, self.render_product_list()));
                events.push(StoreEvent::ViewChanged {
                    shown: self.visible_products().len(),
                });
            }
            Action::SelectCategory(filter) => {
                self.ui.active_filter = std::mem::take(&mut self.ui.active_filter).select(filter.clone());
                self.ui.grid = GridView::Category(filter.clone());
                updates.push(RegionUpdate::replace(Region::FilterBar, self.render_filter_bar()));
                updates.push(RegionUpdate::replace(Region::ProductList, self.render_product_list()));
                events.push(StoreEvent::ViewChanged {
                    shown: self.visible_products().len(),
                });
            }
            Action::ViewDetails(id) => {
                if let Some(product) = self.catalog.find(*id) {
                    updates.push(RegionUpdate::replace(Region::ModalContent, render_modal_content(product)));
                    updates.push(RegionUpdate::set_class(Region::ProductModal, "open", true));
                    self.ui.modal = self.ui.modal.show(*id);
                    events.push(StoreEvent::ModalChanged(self.ui.modal));
                }
            }
            Action::CloseModal => {
                self.ui.modal = self.ui.modal.hide();
                updates.push(RegionUpdate::set_class(Region::ProductModal, "open", false));
                events.push(StoreEvent::ModalChanged(self.ui.modal));
            }
            Action::OpenCart => {
                updates.push(RegionUpdate::replace(Region::CartItems, render_cart_items(self.cart.lines())));
                updates.push(RegionUpdate::replace(Region::CartTotal, render_cart_total(self.cart.total())));
                self.open_cart(&mut updates, &mut events);
            }
            Action::CloseCart => {
                self.close_cart(&mut updates, &mut events);
            }
            Action::ToggleTheme => {
                self.ui.theme = self.ui.theme.toggle();
                updates.push(RegionUpdate::set_class(Region::Body, "dark-mode", self.ui.theme.is_dark()));
                events.push(StoreEvent::ThemeChanged(self.ui.theme));
            }
            Action::PlaceOrder => match self.cart.place_order() {
                Ok(receipt) => {
                    updates.extend(self.cart_updates());
                    self.close_cart(&mut updates, &mut events);
                    events.push(self.cart_changed());
                    events.push(StoreEvent::OrderPlaced(receipt));
                    self.raise_toast(Toast::success(ORDER_PLACED_MESSAGE, now), now, &mut updates, &mut events);
                }
                Err(CommerceError::EmptyCart) => {
                    self.logger.warn("Order attempted on an empty cart");
                    events.push(StoreEvent::OrderRejected);
                    let message = CommerceError::EmptyCart.to_string();
                    self.raise_toast(Toast::warning(message, now), now, &mut updates, &mut events);
                }
                Err(e) => return Err(e),
            },
        }

        self.logger
            .debug_builder("Action dispatched")
            .field("action", format!("{:?}", action))
            .field_i64("updates", updates.len() as i64)
            .emit();

        for event in &events {
            self.listeners.emit(event);
        }
        Ok(updates)
    }

    /// Select a category by its button id.
    pub fn select_category(&mut self, category: &str) -> Result<Vec<RegionUpdate>, CommerceError> {
        self.dispatch(Action::SelectCategory(CategoryFilter::from_button(category)))
    }

    /// Hide the toast once its display time has passed.
    ///
    /// Returns the updates to apply, empty when nothing changed.
    pub fn expire_toast(&mut self, now: Instant) -> Vec<RegionUpdate> {
        match &self.ui.toast {
            Some(toast) if !toast.is_visible(now, self.settings.toast_duration) => {
                self.ui.toast = None;
                vec![
                    RegionUpdate::replace(Region::Toast, ""),
                    RegionUpdate::set_class(Region::Toast, "visible", false),
                ]
            }
            _ => Vec::new(),
        }
    }

    /// Draw a fresh recommendation sample.
    pub fn reshuffle_recommendations<R: Rng + ?Sized>(&mut self, rng: &mut R) -> RegionUpdate {
        self.recommended = self
            .catalog
            .recommendations(rng, self.settings.recommendation_count)
            .into_iter()
            .map(|p| p.id)
            .collect();
        RegionUpdate::replace(Region::Recommendations, self.render_recommendations())
    }

    /// Products currently recommended, in strip order.
    pub fn recommended(&self) -> Vec<&Product> {
        self.recommended
            .iter()
            .filter_map(|id| self.catalog.find(*id))
            .collect()
    }

    /// Products the grid currently shows.
    pub fn visible_products(&self) -> Vec<&Product> {
        match &self.ui.grid {
            GridView::Category(filter) => self.catalog.filter_by_category(filter),
            GridView::Search(term) => self.catalog.filter_by_search_term(term),
        }
    }

    pub fn render_product_list(&self) -> String {
        match self.catalog.state() {
            CatalogState::Unavailable(reason) => render_catalog_unavailable(reason),
            _ => render_product_grid(&self.visible_products()),
        }
    }

    pub fn render_filter_bar(&self) -> String {
        render_filter_bar(&self.catalog.categories(), &self.ui.active_filter)
    }

    pub fn render_recommendations(&self) -> String {
        render_recommendations(&self.recommended())
    }

    /// Render every region as of `now`.
    pub fn render_all(&self, now: Instant) -> Vec<RegionUpdate> {
        let view = self.page_view(now);
        vec![
            RegionUpdate::replace(Region::FilterBar, view.filter_bar),
            RegionUpdate::replace(Region::Recommendations, view.recommendations),
            RegionUpdate::replace(Region::ProductList, view.product_list),
            RegionUpdate::replace(Region::CartItems, view.cart_items),
            RegionUpdate::replace(Region::CartTotal, view.cart_total),
            RegionUpdate::replace(Region::CartCount, view.cart_count),
            RegionUpdate::replace(Region::ModalContent, view.modal_content),
            RegionUpdate::replace(Region::Toast, view.toast),
            RegionUpdate::set_class(Region::CartSidebar, "open", view.cart_open),
            RegionUpdate::set_class(Region::ProductModal, "open", view.modal_open),
            RegionUpdate::set_class(Region::Toast, "visible", view.toast_visible),
            RegionUpdate::set_class(Region::Body, "dark-mode", view.dark_mode),
        ]
    }

    /// Render the full HTML document as of `now`.
    pub fn render_page(&self, now: Instant) -> String {
        self.shell.render(&self.page_view(now))
    }

    fn page_view(&self, now: Instant) -> PageView {
        let (toast, toast_visible) =
            render_toast(self.ui.toast.as_ref(), now, self.settings.toast_duration);
        let modal_content = self
            .ui
            .modal
            .product()
            .and_then(|id| self.catalog.find(id))
            .map(render_modal_content)
            .unwrap_or_default();

        PageView {
            filter_bar: self.render_filter_bar(),
            recommendations: self.render_recommendations(),
            product_list: self.render_product_list(),
            cart_items: render_cart_items(self.cart.lines()),
            cart_total: render_cart_total(self.cart.total()),
            cart_count: render_cart_count(self.cart.count()),
            modal_open: !modal_content.is_empty(),
            modal_content,
            toast,
            search_term: match &self.ui.grid {
                GridView::Search(term) => term.clone(),
                GridView::Category(_) => String::new(),
            },
            dark_mode: self.ui.theme.is_dark(),
            cart_open: self.ui.cart_panel.is_open(),
            toast_visible,
            toast_class: self
                .ui
                .toast
                .as_ref()
                .map(|t| toast_class(t.level))
                .unwrap_or(""),
        }
    }

    fn cart_updates(&self) -> [RegionUpdate; 3] {
        [
            RegionUpdate::replace(Region::CartCount, render_cart_count(self.cart.count())),
            RegionUpdate::replace(Region::CartItems, render_cart_items(self.cart.lines())),
            RegionUpdate::replace(Region::CartTotal, render_cart_total(self.cart.total())),
        ]
    }

    fn cart_changed(&self) -> StoreEvent {
        StoreEvent::CartChanged {
            count: self.cart.count(),
            total: self.cart.total(),
        }
    }

    fn open_cart(&mut self, updates: &mut Vec<RegionUpdate>, events: &mut Vec<StoreEvent>) {
        self.ui.cart_panel = self.ui.cart_panel.open();
        updates.push(RegionUpdate::set_class(Region::CartSidebar, "open", true));
        events.push(StoreEvent::CartPanelChanged(self.ui.cart_panel));
    }

    fn close_cart(&mut self, updates: &mut Vec<RegionUpdate>, events: &mut Vec<StoreEvent>) {
        self.ui.cart_panel = self.ui.cart_panel.close();
        updates.push(RegionUpdate::set_class(Region::CartSidebar, "open", false));
        events.push(StoreEvent::CartPanelChanged(self.ui.cart_panel));
    }

    fn raise_toast(
        &mut self,
        toast: Toast,
        now: Instant,
        updates: &mut Vec<RegionUpdate>,
        events: &mut Vec<StoreEvent>,
    ) {
        let (text, visible) = render_toast(Some(&toast), now, self.settings.toast_duration);
        updates.push(RegionUpdate::replace(Region::Toast, text));
        updates.push(RegionUpdate::set_class(Region::Toast, "visible", visible));
        updates.push(RegionUpdate::set_class(
            Region::Toast,
            "toast--warning",
            toast.level == ToastLevel::Warning,
        ));
        events.push(StoreEvent::ToastRaised(toast.message.clone()));
        self.ui.toast = Some(toast);
    }
}
