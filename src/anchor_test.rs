#![allow(clippy::float_cmp)]

use super::*;
use crate::consts::ANCHOR_OFFSET_PX;

#[test]
fn bare_hash_is_not_a_target() {
    assert_eq!(target_selector("#"), None);
}

#[test]
fn fragment_is_its_own_selector() {
    assert_eq!(target_selector("#about"), Some("#about"));
}

#[test]
fn non_fragment_href_is_ignored() {
    assert_eq!(target_selector("/resume.pdf"), None);
    assert_eq!(target_selector(""), None);
}

#[test]
fn scroll_top_leaves_room_for_navbar() {
    assert_eq!(scroll_top_for(1000.0, ANCHOR_OFFSET_PX), 920.0);
}

#[test]
fn scroll_top_never_negative() {
    assert_eq!(scroll_top_for(50.0, ANCHOR_OFFSET_PX), 0.0);
    assert_eq!(scroll_top_for(80.0, ANCHOR_OFFSET_PX), 0.0);
}
