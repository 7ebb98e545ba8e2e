//! Page configuration.
//!
//! Every field has a default matching the shipped page. A page may override
//! any subset by embedding a JSON object in
//! `<script type="application/json" id="portfolio-config">`.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

use crate::consts;
use crate::error::ConfigError;
use crate::typing::PhraseList;

/// Delays driving the typing animation, in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timings {
    pub type_delay_ms: u32,
    pub delete_delay_ms: u32,
    pub hold_full_ms: u32,
    pub hold_empty_ms: u32,
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            type_delay_ms: consts::TYPE_DELAY_MS,
            delete_delay_ms: consts::DELETE_DELAY_MS,
            hold_full_ms: consts::HOLD_FULL_MS,
            hold_empty_ms: consts::HOLD_EMPTY_MS,
        }
    }
}

/// Pixel thresholds used by the scroll controller.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollThresholds {
    pub section_lookahead_px: f64,
    pub indicator_hide_after_px: f64,
    pub navbar_shadow_after_px: f64,
}

impl Default for ScrollThresholds {
    fn default() -> Self {
        Self {
            section_lookahead_px: consts::SECTION_LOOKAHEAD_PX,
            indicator_hide_after_px: consts::INDICATOR_HIDE_AFTER_PX,
            navbar_shadow_after_px: consts::NAVBAR_SHADOW_AFTER_PX,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    pub phrases: Vec<String>,
    pub type_delay_ms: u32,
    pub delete_delay_ms: u32,
    pub hold_full_ms: u32,
    pub hold_empty_ms: u32,
    pub section_lookahead_px: f64,
    pub indicator_hide_after_px: f64,
    pub navbar_shadow_after_px: f64,
    pub anchor_offset_px: f64,
    pub status_clear_ms: u32,
    pub scroll_settle_ms: u32,
}

impl Default for PageConfig {
    fn default() -> Self {
        let timings = Timings::default();
        let thresholds = ScrollThresholds::default();
        Self {
            phrases: consts::DEFAULT_PHRASES.iter().map(|p| (*p).to_owned()).collect(),
            type_delay_ms: timings.type_delay_ms,
            delete_delay_ms: timings.delete_delay_ms,
            hold_full_ms: timings.hold_full_ms,
            hold_empty_ms: timings.hold_empty_ms,
            section_lookahead_px: thresholds.section_lookahead_px,
            indicator_hide_after_px: thresholds.indicator_hide_after_px,
            navbar_shadow_after_px: thresholds.navbar_shadow_after_px,
            anchor_offset_px: consts::ANCHOR_OFFSET_PX,
            status_clear_ms: consts::STATUS_CLEAR_MS,
            scroll_settle_ms: consts::SCROLL_SETTLE_MS,
        }
    }
}

impl PageConfig {
    /// Parse a JSON override blob. Missing fields keep their defaults.
    ///
    /// # Errors
    ///
    /// [`ConfigError::Parse`] for malformed JSON, [`ConfigError::EmptyPhrases`]
    /// when `phrases` is present but empty.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// # Errors
    ///
    /// [`ConfigError::EmptyPhrases`] when there is nothing to type.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.phrases.is_empty() {
            return Err(ConfigError::EmptyPhrases);
        }
        Ok(())
    }

    /// # Errors
    ///
    /// [`ConfigError::EmptyPhrases`] when there is nothing to type.
    pub fn phrase_list(&self) -> Result<PhraseList, ConfigError> {
        PhraseList::new(&self.phrases)
    }

    #[must_use]
    pub fn timings(&self) -> Timings {
        Timings {
            type_delay_ms: self.type_delay_ms,
            delete_delay_ms: self.delete_delay_ms,
            hold_full_ms: self.hold_full_ms,
            hold_empty_ms: self.hold_empty_ms,
        }
    }

    #[must_use]
    pub fn scroll_thresholds(&self) -> ScrollThresholds {
        ScrollThresholds {
            section_lookahead_px: self.section_lookahead_px,
            indicator_hide_after_px: self.indicator_hide_after_px,
            navbar_shadow_after_px: self.navbar_shadow_after_px,
        }
    }
}
