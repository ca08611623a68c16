//! Terminal rendering for catalog and cart listings.

use console::style;
use duka_commerce::cart::CartLine;
use duka_commerce::catalog::Product;
use duka_commerce::Money;
use duka_storefront::html::render_stars;
use indicatif::{ProgressBar, ProgressStyle};

/// Column widths of the product listing; the stock badge is left unpadded.
const PRODUCT_WIDTHS: [usize; 6] = [4, 28, 16, 12, 6, 0];
const PRODUCT_HEADINGS: [&str; 6] = ["ID", "NAME", "PRICE", "CATEGORY", "RATING", "STOCK"];

/// Column widths of the cart listing.
const CART_WIDTHS: [usize; 4] = [4, 28, 24, 0];

/// Products at or below this stock level get a warning badge.
const LOW_STOCK: u32 = 5;

/// Writes command results to the terminal, or as JSON with `--json`.
#[derive(Clone)]
pub struct Output {
    verbose: bool,
    json: bool,
}

impl Output {
    /// Create a new output handler.
    pub fn new(verbose: bool, json: bool) -> Self {
        Self { verbose, json }
    }

    pub fn info(&self, msg: &str) {
        if self.json {
            return;
        }
        println!("{} {}", style("ℹ").blue(), msg);
    }

    /// Confirmation line for a cart change or a written file.
    pub fn success(&self, msg: &str) {
        if self.json {
            return;
        }
        println!("{} {}", style("✓").green(), msg);
    }

    /// Warnings go to stderr so piped listings stay clean.
    pub fn warn(&self, msg: &str) {
        if self.json {
            return;
        }
        eprintln!("{} {}", style("⚠").yellow(), msg);
    }

    /// Print an error, as `{"error": ...}` in JSON mode.
    pub fn error(&self, msg: &str) {
        if self.json {
            eprintln!("{}", serde_json::json!({ "error": msg }));
            return;
        }
        eprintln!("{} {}", style("✗").red(), style(msg).red());
    }

    /// Print a dimmed detail line, only with `--verbose`.
    pub fn debug(&self, msg: &str) {
        if !self.verbose || self.json {
            return;
        }
        eprintln!("{} {}", style("→").dim(), style(msg).dim());
    }

    pub fn header(&self, msg: &str) {
        if self.json {
            return;
        }
        println!("\n{}", style(msg).bold().underlined());
    }

    pub fn json<T: serde::Serialize>(&self, value: &T) {
        if let Ok(json) = serde_json::to_string_pretty(value) {
            println!("{}", json);
        }
    }

    pub fn kv(&self, key: &str, value: &str) {
        if self.json {
            return;
        }
        println!("  {}: {}", style(key).dim(), value);
    }

    /// Print the product listing, one row per product.
    pub fn products(&self, products: &[&Product]) {
        if self.json {
            return;
        }
        println!("  {}", pad_row(&PRODUCT_HEADINGS, &PRODUCT_WIDTHS));
        for product in products {
            println!("  {}", product_row(product));
        }
    }

    /// Print the cart lines followed by the bolded total.
    pub fn cart_lines(&self, lines: &[CartLine], total: Money) {
        if self.json {
            return;
        }
        for line in lines {
            println!("  {}", cart_line_row(line));
        }
        println!("  {}: {}", style("Total").dim(), style(total.display()).bold());
    }

    /// Spinner shown while the catalog loads; hidden in JSON mode.
    pub fn spinner(&self, msg: &str) -> ProgressBar {
        if self.json {
            return ProgressBar::hidden();
        }

        let pb = ProgressBar::new_spinner();
        if let Ok(spinner_style) = ProgressStyle::default_spinner().template("{spinner:.green} {msg}") {
            pb.set_style(spinner_style);
        }
        pb.set_message(msg.to_string());
        pb.enable_steady_tick(std::time::Duration::from_millis(100));
        pb
    }

    pub fn is_verbose(&self) -> bool {
        self.verbose
    }

    pub fn is_json(&self) -> bool {
        self.json
    }
}

/// Stock text colored by level: red when sold out, yellow when low.
pub fn stock_badge(product: &Product) -> String {
    let text = product.stock_text();
    match product.stock {
        0 => style(text).red().to_string(),
        s if s <= LOW_STOCK => style(text).yellow().to_string(),
        _ => style(text).green().to_string(),
    }
}

fn product_row(product: &Product) -> String {
    let id = product.id.to_string();
    let price = product.price.display();
    let stars = render_stars(product.filled_stars());
    let stock = stock_badge(product);
    pad_row(
        &[&id, &product.name, &price, &product.category, &stars, &stock],
        &PRODUCT_WIDTHS,
    )
}

fn cart_line_row(line: &CartLine) -> String {
    let id = line.id.to_string();
    let unit = format!("{} x {}", line.price.display(), line.quantity);
    let subtotal = line.line_total().display();
    pad_row(&[&id, &line.name, &unit, &subtotal], &CART_WIDTHS)
}

fn pad_row(cols: &[&str], widths: &[usize]) -> String {
    let padded: Vec<String> = cols
        .iter()
        .zip(widths)
        .map(|(col, width)| format!("{:width$}", col, width = width))
        .collect();
    padded.join("  ").trim_end().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use console::strip_ansi_codes;
    use duka_commerce::Currency;

    fn radio() -> Product {
        Product::new(7, "Radio", Money::new(150_000, Currency::KES), "audio")
    }

    #[test]
    fn test_stock_badge_text() {
        assert_eq!(strip_ansi_codes(&stock_badge(&radio())), "Out of stock");
        assert_eq!(
            strip_ansi_codes(&stock_badge(&radio().with_stock(3))),
            "3 available"
        );
        assert_eq!(
            strip_ansi_codes(&stock_badge(&radio().with_stock(40))),
            "40 available"
        );
    }

    #[test]
    fn test_cart_line_row_shows_unit_and_subtotal() {
        let mut line = CartLine::from_product(&radio());
        line.quantity = 3;
        let row = cart_line_row(&line);
        assert!(row.starts_with("7     Radio"));
        assert!(row.contains("Ksh 1,500.00 x 3"));
        assert!(row.ends_with("Ksh 4,500.00"));
    }

    #[test]
    fn test_product_row_columns() {
        let row = strip_ansi_codes(&product_row(&radio().with_stock(2))).to_string();
        assert!(row.starts_with("7     Radio"));
        assert!(row.contains("Ksh 1,500.00"));
        assert!(row.contains("audio"));
        assert!(row.ends_with("2 available"));
    }

    #[test]
    fn test_pad_row_trims_trailing_space() {
        assert_eq!(pad_row(&["1", "a"], &[3, 5]), "1    a");
    }
}
