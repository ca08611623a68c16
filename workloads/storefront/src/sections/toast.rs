//! Toast renderer.

use std::time::{Duration, Instant};

use crate::html::escape_html;
use crate::ui::{Toast, ToastLevel};

/// Render the toast element's markup at `now`.
///
/// Returns the text and whether the element is shown.
pub fn render_toast(toast: Option<&Toast>, now: Instant, duration: Duration) -> (String, bool) {
    match toast {
        Some(toast) if toast.is_visible(now, duration) => (escape_html(&toast.message), true),
        _ => (String::new(), false),
    }
}

/// CSS modifier class for a toast level.
pub fn toast_class(level: ToastLevel) -> &'static str {
    match level {
        ToastLevel::Success => "toast--success",
        ToastLevel::Warning => "toast--warning",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::TOAST_DURATION;

    #[test]
    fn test_toast_hides_after_duration() {
        let raised = Instant::now();
        let toast = Toast::success("Radio added to cart!", raised);

        let (text, shown) = render_toast(Some(&toast), raised, TOAST_DURATION);
        assert_eq!(text, "Radio added to cart!");
        assert!(shown);

        let (text, shown) = render_toast(Some(&toast), raised + Duration::from_secs(3), TOAST_DURATION);
        assert!(text.is_empty());
        assert!(!shown);
    }

    #[test]
    fn test_no_toast() {
        assert_eq!(render_toast(None, Instant::now(), TOAST_DURATION), (String::new(), false));
        assert_eq!(toast_class(ToastLevel::Warning), "toast--warning");
    }
}
