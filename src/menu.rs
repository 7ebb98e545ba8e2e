//! Mobile navigation menu open/closed state.

#[cfg(test)]
#[path = "menu_test.rs"]
mod menu_test;

/// Key that closes the menu from anywhere on the page.
pub const CLOSE_KEY: &str = "Escape";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MenuState {
    pub open: bool,
}

impl MenuState {
    /// Hamburger button pressed.
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    /// A nav link was followed, or the menu was dismissed.
    pub fn close(&mut self) {
        self.open = false;
    }

    /// Handle a `keydown`. Returns `true` when `key` is the close key.
    pub fn on_key(&mut self, key: &str) -> bool {
        if key == CLOSE_KEY {
            self.close();
            return true;
        }
        false
    }
}
