//! Scroll-reactive UI state.
//!
//! On every scroll event the host reads the vertical offset and the live
//! layout of each section, then asks [`ScrollController::on_scroll`] what the
//! page should look like. Nothing is cached between calls.

#[cfg(test)]
#[path = "scroll_test.rs"]
mod scroll_test;

use crate::config::ScrollThresholds;
use crate::consts::{NAVBAR_SHADOW_HEAVY, NAVBAR_SHADOW_LIGHT};

/// Layout of one page section, as read from the document.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionBounds {
    /// The section's `id` attribute. A section without one can still be the
    /// active section, but no nav link matches it.
    pub id: Option<String>,
    /// Offset of the section's top edge from the document top, in pixels.
    pub top: f64,
    pub height: f64,
}

impl SectionBounds {
    #[must_use]
    pub fn new(id: impl Into<String>, top: f64, height: f64) -> Self {
        Self { id: Some(id.into()), top, height }
    }

    /// A section with no `id` attribute.
    #[must_use]
    pub fn unnamed(top: f64, height: f64) -> Self {
        Self { id: None, top, height }
    }
}

/// Presentation state derived from a single scroll offset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScrollView {
    /// Id of the section whose nav link should be highlighted.
    pub active_section: Option<String>,
    pub indicator_visible: bool,
    pub navbar_elevated: bool,
}

impl ScrollView {
    /// CSS `opacity` for the scroll indicator.
    #[must_use]
    pub fn indicator_opacity(&self) -> &'static str {
        if self.indicator_visible { "1" } else { "0" }
    }

    /// CSS `pointer-events` for the scroll indicator.
    #[must_use]
    pub fn indicator_pointer_events(&self) -> &'static str {
        if self.indicator_visible { "auto" } else { "none" }
    }

    /// CSS `box-shadow` for the navbar.
    #[must_use]
    pub fn navbar_shadow(&self) -> &'static str {
        if self.navbar_elevated { NAVBAR_SHADOW_HEAVY } else { NAVBAR_SHADOW_LIGHT }
    }

    /// Whether a nav link bound to `section` should be marked active.
    #[must_use]
    pub fn is_link_active(&self, section: Option<&str>) -> bool {
        match (section, self.active_section.as_deref()) {
            (Some(link), Some(active)) => link == active,
            _ => false,
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ScrollController {
    thresholds: ScrollThresholds,
}

impl ScrollController {
    #[must_use]
    pub fn new(thresholds: ScrollThresholds) -> Self {
        Self { thresholds }
    }

    /// Derive the page's scroll-dependent state from `offset`.
    #[must_use]
    pub fn on_scroll(&self, offset: f64, sections: &[SectionBounds]) -> ScrollView {
        ScrollView {
            active_section: self.active_section(offset, sections).map(str::to_owned),
            indicator_visible: offset <= self.thresholds.indicator_hide_after_px,
            navbar_elevated: offset > self.thresholds.navbar_shadow_after_px,
        }
    }

    /// The last section, in document order, whose look-ahead threshold the
    /// offset has reached. `None` above every threshold, or when that
    /// section has no id.
    ///
    /// When look-ahead regions overlap a later section wins even if an
    /// earlier one still covers the offset.
    #[must_use]
    pub fn active_section<'a>(&self, offset: f64, sections: &'a [SectionBounds]) -> Option<&'a str> {
        sections
            .iter()
            .rev()
            .find(|s| offset >= s.top - self.thresholds.section_lookahead_px)
            .and_then(|s| s.id.as_deref())
    }
}
