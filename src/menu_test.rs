use super::*;

#[test]
fn menu_starts_closed() {
    assert!(!MenuState::default().open);
}

#[test]
fn toggle_flips_open() {
    let mut menu = MenuState::default();
    assert!(menu.toggle());
    assert!(!menu.toggle());
}

#[test]
fn close_is_idempotent() {
    let mut menu = MenuState { open: true };
    menu.close();
    menu.close();
    assert!(!menu.open);
}

#[test]
fn escape_closes_open_menu() {
    let mut menu = MenuState { open: true };
    assert!(menu.on_key("Escape"));
    assert!(!menu.open);
}

#[test]
fn other_keys_leave_menu_untouched() {
    let mut menu = MenuState { open: true };
    assert!(!menu.on_key("Tab"));
    assert!(!menu.on_key("escape"));
    assert!(menu.open);
}
