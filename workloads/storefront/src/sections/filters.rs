//! Category filter bar renderer.

use duka_commerce::catalog::ALL_CATEGORIES;

use crate::events::controls;
use crate::html::escape_html;
use crate::ui::ActiveFilter;

/// Render the `all` button followed by one button per category.
pub fn render_filter_bar(categories: &[&str], active: &ActiveFilter) -> String {
    std::iter::once(ALL_CATEGORIES)
        .chain(categories.iter().copied().filter(|c| *c != ALL_CATEGORIES))
        .map(|category| render_filter_button(category, active.is_active(category)))
        .collect()
}

fn render_filter_button(category: &str, active: bool) -> String {
    let class = if active { "filter-btn active" } else { "filter-btn" };
    format!(
        r#"<button class="{class}" data-action="{filter}" data-category="{category}">{label}</button>
"#,
        class = class,
        filter = controls::FILTER,
        category = escape_html(category),
        label = escape_html(&button_label(category)),
    )
}

fn button_label(category: &str) -> String {
    let mut chars = category.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use duka_commerce::catalog::CategoryFilter;

    #[test]
    fn test_all_button_first_and_active_by_default() {
        let html = render_filter_bar(&["phones", "tvs"], &ActiveFilter::default());
        assert!(html.starts_with(r#"<button class="filter-btn active" data-action="filter" data-category="all">All</button>"#));
        assert!(html.contains(r#"<button class="filter-btn" data-action="filter" data-category="phones">Phones</button>"#));
        assert_eq!(html.matches("active").count(), 1);
    }

    #[test]
    fn test_selected_category_is_only_active_button() {
        let active = ActiveFilter::default().select(CategoryFilter::from_button("tvs"));
        let html = render_filter_bar(&["phones", "tvs"], &active);
        assert!(html.contains(r#"<button class="filter-btn active" data-action="filter" data-category="tvs">"#));
        assert_eq!(html.matches("filter-btn active").count(), 1);
    }
}
