use super::*;

fn sections() -> Vec<SectionBounds> {
    vec![
        SectionBounds::new("home", 400.0, 600.0),
        SectionBounds::new("about", 1000.0, 700.0),
        SectionBounds::new("contact", 1700.0, 500.0),
    ]
}

fn controller() -> ScrollController {
    ScrollController::new(ScrollThresholds::default())
}

// =============================================================
// Active section
// =============================================================

#[test]
fn none_active_above_every_threshold() {
    let view = controller().on_scroll(0.0, &sections());
    assert_eq!(view.active_section, None);
}

#[test]
fn threshold_is_inclusive() {
    let c = controller();
    let s = sections();
    assert_eq!(c.active_section(200.0, &s), Some("home"));
    assert_eq!(c.active_section(199.0, &s), None);
    assert_eq!(c.active_section(800.0, &s), Some("about"));
    assert_eq!(c.active_section(799.0, &s), Some("home"));
}

#[test]
fn last_qualifying_section_wins() {
    let s = vec![SectionBounds::new("a", 0.0, 800.0), SectionBounds::new("b", 800.0, 800.0)];
    assert_eq!(controller().active_section(650.0, &s), Some("b"));
    assert_eq!(controller().active_section(599.0, &s), Some("a"));
}

#[test]
fn far_past_end_keeps_last_section() {
    assert_eq!(controller().active_section(10_000.0, &sections()), Some("contact"));
}

#[test]
fn empty_registry_has_no_active_section() {
    assert_eq!(controller().active_section(500.0, &[]), None);
}

#[test]
fn lookahead_follows_thresholds() {
    let c = ScrollController::new(ScrollThresholds { section_lookahead_px: 0.0, ..ScrollThresholds::default() });
    assert_eq!(c.active_section(399.0, &sections()), None);
    assert_eq!(c.active_section(400.0, &sections()), Some("home"));
}

// =============================================================
// Link highlighting
// =============================================================

#[test]
fn exactly_one_link_matches_active_section() {
    let view = controller().on_scroll(1000.0, &sections());
    let links = [Some("home"), Some("about"), Some("contact"), None];
    let active = links.iter().filter(|l| view.is_link_active(**l)).count();
    assert_eq!(active, 1);
    assert!(view.is_link_active(Some("about")));
}

#[test]
fn section_without_id_lights_no_link() {
    let s = vec![SectionBounds::new("a", 0.0, 500.0), SectionBounds::unnamed(500.0, 500.0)];
    let view = controller().on_scroll(400.0, &s);
    assert_eq!(view.active_section, None);
    assert!(!view.is_link_active(Some("")));
    assert!(!view.is_link_active(Some("a")));
}

#[test]
fn empty_id_is_still_an_id() {
    let s = vec![SectionBounds::new("", 0.0, 500.0)];
    assert_eq!(controller().active_section(0.0, &s), Some(""));
}

#[test]
fn no_link_active_at_top() {
    let view = controller().on_scroll(0.0, &sections());
    assert!(!view.is_link_active(Some("home")));
    assert!(!view.is_link_active(None));
}

// =============================================================
// Indicator and navbar
// =============================================================

#[test]
fn indicator_visible_at_top_hidden_past_threshold() {
    let top = controller().on_scroll(0.0, &[]);
    assert!(top.indicator_visible);
    assert_eq!(top.indicator_opacity(), "1");
    assert_eq!(top.indicator_pointer_events(), "auto");

    let edge = controller().on_scroll(100.0, &[]);
    assert!(edge.indicator_visible);

    let past = controller().on_scroll(150.0, &[]);
    assert!(!past.indicator_visible);
    assert_eq!(past.indicator_opacity(), "0");
    assert_eq!(past.indicator_pointer_events(), "none");
}

#[test]
fn navbar_shadow_is_strictly_greater_than_threshold() {
    let at = controller().on_scroll(50.0, &[]);
    assert!(!at.navbar_elevated);
    assert_eq!(at.navbar_shadow(), NAVBAR_SHADOW_LIGHT);

    let past = controller().on_scroll(50.5, &[]);
    assert!(past.navbar_elevated);
    assert_eq!(past.navbar_shadow(), NAVBAR_SHADOW_HEAVY);
}
