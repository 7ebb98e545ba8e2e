//! In-page anchor links: which element to scroll to and where to stop.

#[cfg(test)]
#[path = "anchor_test.rs"]
mod anchor_test;

/// Selector for the element an anchor `href` points at.
///
/// A bare `"#"` is not a target; the browser's default handling applies.
#[must_use]
pub fn target_selector(href: &str) -> Option<&str> {
    if href == "#" || !href.starts_with('#') {
        return None;
    }
    Some(href)
}

/// Scroll position that puts an element at `target_top` just below the
/// fixed navbar.
#[must_use]
pub fn scroll_top_for(target_top: f64, navbar_offset: f64) -> f64 {
    (target_top - navbar_offset).max(0.0)
}
