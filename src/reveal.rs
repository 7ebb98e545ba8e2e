//! One-shot fade-in reveal and card stagger delays.
//!
//! Targets start hidden and animate in the first time they enter the
//! viewport. The browser's intersection observer reports entries; the
//! [`RevealTracker`] decides which of them fire, at most once per target.

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

use std::collections::BTreeSet;

/// Attribute carrying a target's tracking key on the element.
pub const KEY_ATTRIBUTE: &str = "data-reveal-key";

/// Read a tracking key back from [`KEY_ATTRIBUTE`].
#[must_use]
pub fn parse_key(raw: &str) -> Option<usize> {
    match raw.trim().parse::<usize>() {
        Ok(key) => Some(key),
        Err(_) => None,
    }
}

/// One intersection report for a tracked target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Intersection {
    pub key: usize,
    pub is_intersecting: bool,
}

/// Targets still waiting to be revealed.
#[derive(Debug, Clone, Default)]
pub struct RevealTracker {
    pending: BTreeSet<usize>,
}

impl RevealTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start watching `key`. Returns `false` if it was already pending.
    pub fn track(&mut self, key: usize) -> bool {
        self.pending.insert(key)
    }

    #[must_use]
    pub fn is_pending(&self, key: usize) -> bool {
        self.pending.contains(&key)
    }

    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    /// Keys to reveal now, in report order. Each is removed from tracking so
    /// it can never fire again.
    pub fn on_intersections(&mut self, entries: impl IntoIterator<Item = Intersection>) -> Vec<usize> {
        entries
            .into_iter()
            .filter(|e| e.is_intersecting && self.pending.remove(&e.key))
            .map(|e| e.key)
            .collect()
    }
}

/// CSS `animation-delay` for the card at `index` with a per-card `step`
/// in seconds, e.g. `"0s"`, `"0.1s"`, `"0.25s"`.
#[must_use]
pub fn stagger_delay(index: usize, step_s: f64) -> String {
    // Work in milliseconds so 3 * 0.1 prints as 0.3, not 0.30000000000000004.
    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
    let millis = (index as f64 * step_s * 1000.0).round() as i64;
    let whole = millis / 1000;
    let frac = millis % 1000;
    if frac == 0 {
        return format!("{whole}s");
    }
    let frac = format!("{frac:03}");
    format!("{whole}.{}s", frac.trim_end_matches('0'))
}
