//! Small HTML helpers shared by the section renderers.

use duka_commerce::catalog::MAX_STARS;

/// Escape text for use in element content and quoted attributes.
pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// `★` for each filled star, `☆` for the rest.
pub fn render_stars(filled: u8) -> String {
    let filled = filled.min(MAX_STARS) as usize;
    let empty = MAX_STARS as usize - filled;
    format!("{}{}", "★".repeat(filled), "☆".repeat(empty))
}
