//! Full-page shell with the named insertion points.

use crate::events::controls;
use crate::html::escape_html;

/// Head content for the shell.
#[derive(Debug, Clone, Default)]
pub struct HeadContent {
    /// Page title.
    pub title: Option<String>,
    /// Meta tags.
    pub meta: Vec<(String, String)>,
    /// Inline style blocks.
    pub styles: Vec<String>,
}

impl HeadContent {
    /// Create new head content with a title.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Default::default()
        }
    }

    /// Add a meta tag.
    pub fn with_meta(mut self, name: &str, content: &str) -> Self {
        self.meta.push((name.to_string(), content.to_string()));
        self
    }

    /// Add inline CSS styles.
    pub fn with_style(mut self, css: &str) -> Self {
        self.styles.push(format!("<style>{}</style>", css));
        self
    }

    /// Render head content to HTML.
    pub fn render(&self) -> String {
        let mut html = String::from("<meta charset=\"utf-8\">\n");

        if let Some(title) = &self.title {
            html.push_str(&format!("<title>{}</title>\n", escape_html(title)));
        }

        for (name, content) in &self.meta {
            html.push_str(&format!(
                r#"<meta name="{}" content="{}">"#,
                escape_html(name),
                escape_html(content)
            ));
            html.push('\n');
        }

        for style in &self.styles {
            html.push_str(style);
            html.push('\n');
        }

        html
    }
}

/// Pre-rendered region markup plus the toggles that become classes.
#[derive(Debug, Clone, Default)]
pub struct PageView {
    pub filter_bar: String,
    pub recommendations: String,
    pub product_list: String,
    pub cart_items: String,
    pub cart_total: String,
    pub cart_count: String,
    pub modal_content: String,
    pub toast: String,
    pub search_term: String,
    pub dark_mode: bool,
    pub cart_open: bool,
    pub modal_open: bool,
    pub toast_visible: bool,
    pub toast_class: &'static str,
}

/// Shell template wrapping the storefront regions.
#[derive(Debug, Clone)]
pub struct Shell {
    /// Include doctype declaration.
    pub doctype: bool,
    /// Head content.
    pub head: HeadContent,
    /// Store name shown in the header.
    pub brand: String,
}

impl Shell {
    /// Create a new shell.
    pub fn new(head: HeadContent, brand: impl Into<String>) -> Self {
        Self {
            doctype: true,
            head,
            brand: brand.into(),
        }
    }

    /// The default storefront shell with inline styles.
    pub fn storefront() -> Self {
        Self::new(
            HeadContent::new("Shayratronics | Electronics Store")
                .with_meta("viewport", "width=device-width, initial-scale=1")
                .with_style(STOREFRONT_STYLES),
            "Shayratronics",
        )
    }

    /// Render the whole document around `view`.
    pub fn render(&self, view: &PageView) -> String {
        let mut html = String::new();

        if self.doctype {
            html.push_str("<!DOCTYPE html>\n");
        }

        html.push_str("<html lang=\"en\">\n<head>\n");
        html.push_str(&self.head.render());
        html.push_str("</head>\n");
        html.push_str(&self.render_body(view));
        html.push_str("\n</html>\n");

        html
    }

    fn render_body(&self, view: &PageView) -> String {
        let body_class = if view.dark_mode { r#" class="dark-mode""# } else { "" };
        let sidebar_class = if view.cart_open { "cart-sidebar open" } else { "cart-sidebar" };
        let modal_class = if view.modal_open { "modal open" } else { "modal" };
        let toast_class = if view.toast_visible {
            format!("toast visible {}", view.toast_class)
        } else {
            "toast".to_string()
        };

        format!(
            r#"<body{body_class}>
<header class="site-header">
    <h1>{brand}</h1>
    <input type="search" id="search-input" data-action="{search}" placeholder="Search products..." value="{search_term}">
    <button id="dark-mode-toggle" data-action="{theme}">🌓</button>
    <button id="cart" data-action="{open_cart}">🛒 <span id="cart-count">{cart_count}</span></button>
</header>
<nav id="category-filters" class="category-filters">
{filter_bar}</nav>
<main>
    <section id="recommendations">
{recommendations}
    </section>
    <section id="product-list" class="product-grid">
{product_list}
    </section>
</main>
<aside id="cart-sidebar" class="{sidebar_class}">
    <div class="cart-header">
        <h2>Your Cart</h2>
        <button id="close-cart" data-action="{close_cart}">✖</button>
    </div>
    <div id="cart-items">
{cart_items}
    </div>
    <p id="cart-total">{cart_total}</p>
    <button id="place-order" data-action="{place_order}">Place Order</button>
</aside>
<div id="product-modal" class="{modal_class}">
    <div id="modal-content" class="modal-content">
{modal_content}
    </div>
</div>
<div id="toast" class="{toast_class}">{toast}</div>
</body>"#,
            body_class = body_class,
            brand = escape_html(&self.brand),
            search = controls::SEARCH,
            search_term = escape_html(&view.search_term),
            theme = controls::TOGGLE_THEME,
            open_cart = controls::OPEN_CART,
            cart_count = view.cart_count,
            filter_bar = view.filter_bar,
            recommendations = view.recommendations,
            product_list = view.product_list,
            sidebar_class = sidebar_class,
            close_cart = controls::CLOSE_CART,
            cart_items = view.cart_items,
            cart_total = view.cart_total,
            place_order = controls::PLACE_ORDER,
            modal_class = modal_class,
            modal_content = view.modal_content,
            toast_class = toast_class,
            toast = view.toast,
        )
    }
}

impl Default for Shell {
    fn default() -> Self {
        Self::storefront()
    }
}

/// CSS styles for the storefront.
pub const STOREFRONT_STYLES: &str = r#"
* { box-sizing: border-box; }
body { font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif; margin: 0; background: #f5f5f5; color: #222; }
body.dark-mode { background: #121212; color: #eee; }
.site-header { display: flex; align-items: center; gap: 1rem; background: #0b3d2e; color: white; padding: 1rem 2rem; }
.site-header h1 { margin: 0; font-size: 1.5rem; flex: 1; }
#search-input { padding: 0.5rem; border-radius: 4px; border: none; min-width: 220px; }
.category-filters { display: flex; gap: 0.5rem; padding: 1rem 2rem; }
.filter-btn { border: 1px solid #0b3d2e; background: white; padding: 0.4rem 1rem; border-radius: 16px; cursor: pointer; }
.filter-btn.active { background: #0b3d2e; color: white; }
main { max-width: 1200px; margin: 0 auto; padding: 0 2rem 2rem; }

/* Product grid */
.product-grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(220px, 1fr)); gap: 1rem; }
.product { background: white; border-radius: 8px; padding: 1rem; text-align: center; }
body.dark-mode .product { background: #1e1e1e; }
.product img { width: 100%; aspect-ratio: 1; object-fit: cover; border-radius: 4px; }
.rating { color: #ff9800; }
.price { font-weight: bold; color: #b12704; }
.product-buttons { display: flex; gap: 0.5rem; justify-content: center; }
.product-buttons button, .add-cart-modal { background: #ff9900; border: none; padding: 0.5rem 1rem; border-radius: 4px; cursor: pointer; }
.details-btn { background: #2196f3 !important; color: white; }
.grid-message { grid-column: 1 / -1; text-align: center; color: #666; }
.grid-message--error { color: #b12704; }

/* Recommendations */
#recommendations { margin: 1rem 0; }
.recommendations-strip { display: flex; gap: 1rem; overflow-x: auto; }
.product-small { width: 120px; text-align: center; cursor: pointer; }
.product-small img { width: 100%; aspect-ratio: 1; object-fit: cover; border-radius: 4px; }

/* Cart sidebar */
.cart-sidebar { position: fixed; top: 0; right: -350px; width: 350px; height: 100%; background: white; padding: 1rem; box-shadow: -2px 0 8px rgba(0,0,0,0.2); transition: right 0.3s; overflow-y: auto; }
.cart-sidebar.open { right: 0; }
body.dark-mode .cart-sidebar { background: #1e1e1e; }
.cart-header { display: flex; justify-content: space-between; align-items: center; }
.cart-item { display: flex; gap: 0.5rem; align-items: center; border-bottom: 1px solid #eee; padding: 0.5rem 0; }
.cart-item img { width: 50px; height: 50px; object-fit: cover; }
.cart-item-info { flex: 1; }
.cart-item-info p { margin: 0.2rem 0; }
#place-order { width: 100%; background: #0b3d2e; color: white; border: none; padding: 0.75rem; border-radius: 4px; cursor: pointer; }

/* Modal */
.modal { display: none; position: fixed; inset: 0; background: rgba(0,0,0,0.6); align-items: center; justify-content: center; }
.modal.open { display: flex; }
.modal-content { background: white; color: #222; padding: 2rem; border-radius: 8px; max-width: 480px; }
.modal-content img { width: 100%; border-radius: 4px; }
.modal-buttons { display: flex; gap: 0.5rem; }
.add-cart-modal:disabled { opacity: 0.5; cursor: not-allowed; }

/* Toast */
.toast { display: none; position: fixed; bottom: 2rem; left: 50%; transform: translateX(-50%); background: #333; color: white; padding: 0.75rem 1.5rem; border-radius: 4px; }
.toast.visible { display: block; }
.toast--warning { background: #b12704; }
"#;
