//! Default timings, thresholds and page selectors.

// ── Typing animation ────────────────────────────────────────────

/// Delay after typing one character, in milliseconds.
pub const TYPE_DELAY_MS: u32 = 100;

/// Delay after deleting one character, in milliseconds.
pub const DELETE_DELAY_MS: u32 = 50;

/// Pause once a phrase is fully typed, before deleting starts.
pub const HOLD_FULL_MS: u32 = 2000;

/// Pause once a phrase is fully deleted, before the next phrase starts.
pub const HOLD_EMPTY_MS: u32 = 500;

/// Phrases rotated through by the typing animation.
pub const DEFAULT_PHRASES: [&str; 3] = [
    "Aspiring Data Scientist & AI/ML Enthusiast",
    "Building Intelligent Solutions",
    "Data-Driven Problem Solver",
];

// ── Scroll ──────────────────────────────────────────────────────

/// Look-ahead margin subtracted from a section's top when picking the active one.
pub const SECTION_LOOKAHEAD_PX: f64 = 200.0;

/// The scroll indicator is visible while the offset is at most this.
pub const INDICATOR_HIDE_AFTER_PX: f64 = 100.0;

/// The navbar gets the heavier shadow once the offset exceeds this.
pub const NAVBAR_SHADOW_AFTER_PX: f64 = 50.0;

/// Box shadow for the navbar at rest.
pub const NAVBAR_SHADOW_LIGHT: &str = "0 2px 20px rgba(0, 0, 0, 0.08)";

/// Box shadow for the navbar once scrolled.
pub const NAVBAR_SHADOW_HEAVY: &str = "0 5px 20px rgba(0, 0, 0, 0.15)";

/// Wait before the debounced scroll-settled hook runs.
pub const SCROLL_SETTLE_MS: u32 = 100;

// ── Anchors ─────────────────────────────────────────────────────

/// Height reserved for the fixed navbar when scrolling to an anchor.
pub const ANCHOR_OFFSET_PX: f64 = 80.0;

// ── Reveal ──────────────────────────────────────────────────────

/// Fraction of a target that must be visible before it reveals.
pub const REVEAL_THRESHOLD: f64 = 0.1;

/// Observer root margin; pulls the bottom edge of the viewport up by 50px.
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";

/// Animation applied to a fade-in target when it is revealed.
pub const REVEAL_ANIMATION: &str = "slideInUp 0.8s ease-out forwards";

/// Entrance animation for the hero block on page load.
pub const HERO_ANIMATION: &str = "slideInUp 0.8s ease-out";

/// Per-card stagger step for project cards, in seconds.
pub const PROJECT_CARD_STAGGER_S: f64 = 0.1;

/// Per-card stagger step for skill cards, in seconds.
pub const SKILL_CARD_STAGGER_S: f64 = 0.05;

// ── Contact form ────────────────────────────────────────────────

/// Time the success status stays visible, in milliseconds.
pub const STATUS_CLEAR_MS: u32 = 5000;

// ── Storage ─────────────────────────────────────────────────────

/// `localStorage` key holding the theme preference.
pub const THEME_STORAGE_KEY: &str = "theme";

/// Attribute on `<html>` that carries the applied theme.
pub const THEME_ATTRIBUTE: &str = "data-theme";

// ── Selectors ───────────────────────────────────────────────────

pub const SEL_THEME_TOGGLE: &str = "#themeToggle";
pub const SEL_MENU_TOGGLE: &str = "#menuToggle";
pub const SEL_NAV_MENU: &str = "#navMenu";
pub const SEL_NAV_LINKS: &str = ".nav-link";
pub const SEL_SECTIONS: &str = "section";
pub const SEL_TYPING_TEXT: &str = ".typing-text";
pub const SEL_NAVBAR: &str = ".navbar";
pub const SEL_SCROLL_INDICATOR: &str = ".scroll-indicator";
pub const SEL_FADE_IN: &str = ".fade-in-on-scroll";
pub const SEL_PROJECT_CARDS: &str = ".project-card";
pub const SEL_SKILL_CARDS: &str = ".skill-card";
pub const SEL_HERO: &str = ".hero-content";
pub const SEL_ANCHORS: &str = "a[href^=\"#\"]";
pub const SEL_CONFIG: &str = "#portfolio-config";

/// Element ids, looked up with `getElementById`.
pub const ID_CONTACT_FORM: &str = "contactForm";
pub const ID_FORM_STATUS: &str = "formStatus";

/// Class toggled on nav links, the menu and the menu toggle.
pub const CLASS_ACTIVE: &str = "active";
