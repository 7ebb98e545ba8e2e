//! Light/dark theme preference.
//!
//! The preference lives in `localStorage` under `"theme"` and is applied as
//! the `data-theme` attribute on `<html>`. A missing or unrecognised stored
//! value means [`Theme::Light`].

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Resolve the startup theme from a stored value.
    #[must_use]
    pub fn from_stored(stored: Option<&str>) -> Self {
        match stored {
            Some("dark") => Self::Dark,
            _ => Self::Light,
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Attribute and storage value.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

/// Where a theme preference is read from and written to.
///
/// The page uses `localStorage`; anything with get/set semantics works.
pub trait PreferenceStore {
    fn load(&self) -> Option<String>;
    fn save(&mut self, theme: Theme);
}

/// Read the startup theme from `store`.
pub fn read_preference(store: &impl PreferenceStore) -> Theme {
    Theme::from_stored(store.load().as_deref())
}

/// Flip `current`, persist the result, and return it.
///
/// `current` is whatever is applied on the page right now, so the stored
/// value always ends up equal to the applied one.
pub fn toggle(store: &mut impl PreferenceStore, current: Theme) -> Theme {
    let next = current.toggled();
    store.save(next);
    next
}
