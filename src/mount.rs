//! Attach every controller to the live page.
//!
//! ARCHITECTURE
//! ============
//! Each `mount_*` function looks up its own elements, owns its own state in
//! `Rc<RefCell<_>>` captured by its listeners, and returns a [`MountError`]
//! if something it needs is missing. [`start`] mounts them one by one and
//! only logs failures, so a page without a contact form still gets a working
//! menu and typing animation.

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;

use gloo_timers::callback::Timeout;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Element, ErrorEvent, HtmlElement, HtmlFormElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, KeyboardEvent, PromiseRejectionEvent, ScrollBehavior, ScrollToOptions, Window,
};

use crate::anchor;
use crate::config::PageConfig;
use crate::consts::*;
use crate::debounce::Debouncer;
use crate::dom;
use crate::error::MountError;
use crate::form::{self, ContactForm, Field, SubmitOutcome};
use crate::menu::MenuState;
use crate::reveal::{self, Intersection, RevealTracker};
use crate::scroll::{ScrollController, SectionBounds};
use crate::theme::{self, Theme};
use crate::typing::TypingAnimator;

/// Mount every controller. Failures are logged per controller.
pub fn start() {
    report("error listener", mount_error_listener());
    let config = load_config();
    report("theme", mount_theme());
    report("menu", mount_menu());
    report("scroll", mount_scroll(&config));
    report("scroll settle", mount_scroll_settle(&config));
    report("typing", mount_typing(&config));
    report("reveal", mount_reveal());
    report("card stagger", mount_card_stagger());
    report("hero", mount_hero());
    report("anchors", mount_anchors(&config));
    report("contact form", mount_contact_form(&config));
}

fn report(name: &str, result: Result<(), MountError>) {
    match result {
        Ok(()) => log::debug!("mounted {name}"),
        Err(err) => log::warn!("{name} not mounted: {err}"),
    }
}

/// Read the optional JSON override from the page, falling back to defaults.
fn load_config() -> PageConfig {
    let raw = match dom::document().and_then(|doc| dom::query(&doc, SEL_CONFIG)) {
        Ok(Some(el)) => el.text_content(),
        Ok(None) => None,
        Err(err) => {
            log::warn!("config lookup failed: {err}");
            None
        }
    };
    let Some(raw) = raw else {
        return PageConfig::default();
    };
    match PageConfig::from_json(&raw) {
        Ok(config) => config,
        Err(err) => {
            log::warn!("ignoring page config: {err}");
            PageConfig::default()
        }
    }
}

// ── Theme ───────────────────────────────────────────────────────

fn mount_theme() -> Result<(), MountError> {
    let doc = dom::document()?;
    let root = doc.document_element().ok_or(MountError::MissingElement { selector: "html" })?;
    let mut store = dom::LocalPreference::open();

    let initial = theme::read_preference(&store);
    root.set_attribute(THEME_ATTRIBUTE, initial.as_str())
        .map_err(dom::js_error("setAttribute"))?;

    let toggle = dom::require(&doc, SEL_THEME_TOGGLE)?;
    dom::listen(&toggle, "click", move |_| {
        let current = Theme::from_stored(root.get_attribute(THEME_ATTRIBUTE).as_deref());
        let next = theme::toggle(&mut store, current);
        if let Err(err) = root.set_attribute(THEME_ATTRIBUTE, next.as_str()) {
            log::warn!("theme not applied: {}", dom::describe(&err));
        }
    })
}

// ── Menu ────────────────────────────────────────────────────────

#[derive(Clone)]
struct MenuView {
    menu: HtmlElement,
    toggle: HtmlElement,
}

impl MenuView {
    fn render(&self, state: MenuState) {
        for el in [&self.menu, &self.toggle] {
            if let Err(err) = dom::set_class(el, CLASS_ACTIVE, state.open) {
                log::warn!("menu class not applied: {err}");
            }
        }
    }
}

fn mount_menu() -> Result<(), MountError> {
    let doc = dom::document()?;
    let view = MenuView { menu: dom::require(&doc, SEL_NAV_MENU)?, toggle: dom::require(&doc, SEL_MENU_TOGGLE)? };
    let state = Rc::new(RefCell::new(MenuState::default()));

    {
        let state = Rc::clone(&state);
        let view = view.clone();
        let toggle = view.toggle.clone();
        dom::listen(&toggle, "click", move |_| {
            state.borrow_mut().toggle();
            view.render(*state.borrow());
        })?;
    }

    for link in dom::query_all(&doc, SEL_NAV_LINKS)? {
        let state = Rc::clone(&state);
        let view = view.clone();
        dom::listen(&link, "click", move |_| {
            state.borrow_mut().close();
            view.render(*state.borrow());
        })?;
    }

    dom::listen(&doc, "keydown", move |event| {
        let Some(key) = event.dyn_ref::<KeyboardEvent>().map(KeyboardEvent::key) else {
            return;
        };
        if state.borrow_mut().on_key(&key) {
            view.render(*state.borrow());
        }
    })
}

// ── Scroll ──────────────────────────────────────────────────────

/// Elements the scroll controller reads from and writes to.
struct ScrollTargets {
    window: Window,
    sections: Vec<HtmlElement>,
    links: Vec<HtmlElement>,
    navbar: Option<HtmlElement>,
    indicator: Option<HtmlElement>,
}

impl ScrollTargets {
    /// Layout is read fresh on every call; it changes with viewport size.
    fn section_bounds(&self) -> Vec<SectionBounds> {
        self.sections
            .iter()
            .map(|s| SectionBounds {
                id: s.get_attribute("id"),
                top: f64::from(s.offset_top()),
                height: f64::from(s.client_height()),
            })
            .collect()
    }

    fn update(&self, controller: &ScrollController) {
        let offset = match self.window.scroll_y() {
            Ok(offset) => offset,
            Err(err) => {
                log::warn!("scroll offset unavailable: {}", dom::describe(&err));
                return;
            }
        };
        let view = controller.on_scroll(offset, &self.section_bounds());

        for link in &self.links {
            let active = view.is_link_active(link.get_attribute("data-section").as_deref());
            if let Err(err) = dom::set_class(link, CLASS_ACTIVE, active) {
                log::warn!("nav link not updated: {err}");
            }
        }

        if let Some(indicator) = &self.indicator {
            let styled = dom::set_style(indicator, "opacity", view.indicator_opacity())
                .and_then(|()| dom::set_style(indicator, "pointer-events", view.indicator_pointer_events()));
            if let Err(err) = styled {
                log::warn!("scroll indicator not updated: {err}");
            }
        }

        if let Some(navbar) = &self.navbar {
            if let Err(err) = dom::set_style(navbar, "box-shadow", view.navbar_shadow()) {
                log::warn!("navbar shadow not updated: {err}");
            }
        }
    }
}

fn mount_scroll(config: &PageConfig) -> Result<(), MountError> {
    let window = dom::window()?;
    let doc = window.document().ok_or(MountError::NoDocument)?;
    let targets = ScrollTargets {
        window: window.clone(),
        sections: dom::query_all(&doc, SEL_SECTIONS)?,
        links: dom::query_all(&doc, SEL_NAV_LINKS)?,
        navbar: dom::query(&doc, SEL_NAVBAR)?,
        indicator: dom::query(&doc, SEL_SCROLL_INDICATOR)?,
    };
    let controller = ScrollController::new(config.scroll_thresholds());

    targets.update(&controller);
    dom::listen(&window, "scroll", move |_| targets.update(&controller))
}

/// Debounced hook that runs once scrolling has been idle for a while.
fn mount_scroll_settle(config: &PageConfig) -> Result<(), MountError> {
    let window = dom::window()?;
    let wait_ms = config.scroll_settle_ms;
    let debouncer = Rc::new(RefCell::new(Debouncer::new()));
    let pending: Rc<RefCell<Option<Timeout>>> = Rc::default();
    let win = window.clone();

    dom::listen(&window, "scroll", move |_| {
        let ticket = debouncer.borrow_mut().call();
        let debouncer = Rc::clone(&debouncer);
        let win = win.clone();
        let timeout = Timeout::new(wait_ms, move || {
            if debouncer.borrow_mut().fire(ticket) {
                log::debug!("scroll settled at {}px", win.scroll_y().unwrap_or_default());
            }
        });
        // Replacing the previous timeout cancels it.
        *pending.borrow_mut() = Some(timeout);
    })
}

// ── Typing ──────────────────────────────────────────────────────

struct TypingRunner {
    target: HtmlElement,
    animator: RefCell<TypingAnimator>,
    generation: Cell<u64>,
}

impl TypingRunner {
    /// Start (or restart) the loop. A restart bumps the generation so the
    /// previous loop exits at its next wake-up without touching the state.
    fn start(self: &Rc<Self>) {
        let generation = self.generation.get().wrapping_add(1);
        self.generation.set(generation);
        let runner = Rc::clone(self);
        wasm_bindgen_futures::spawn_local(async move {
            while runner.generation.get() == generation {
                let step = runner.animator.borrow_mut().advance();
                runner.target.set_text_content(Some(&step.text));
                gloo_timers::future::sleep(Duration::from_millis(u64::from(step.delay_ms))).await;
            }
        });
    }
}

fn mount_typing(config: &PageConfig) -> Result<(), MountError> {
    let doc = dom::document()?;
    let target = dom::require(&doc, SEL_TYPING_TEXT)?;
    let animator = TypingAnimator::new(config.phrase_list()?, config.timings());
    let runner = Rc::new(TypingRunner { target, animator: RefCell::new(animator), generation: Cell::new(0) });
    dom::on_load(move || runner.start())
}

// ── Reveal ──────────────────────────────────────────────────────

fn mount_reveal() -> Result<(), MountError> {
    let doc = dom::document()?;
    let targets = dom::query_all(&doc, SEL_FADE_IN)?;
    if targets.is_empty() {
        return Ok(());
    }

    let tracker = Rc::new(RefCell::new(RevealTracker::new()));
    let callback = {
        let tracker = Rc::clone(&tracker);
        Closure::wrap(Box::new(move |entries: js_sys::Array, observer: IntersectionObserver| {
            let mut reports = Vec::new();
            let mut elements: Vec<(usize, Element)> = Vec::new();
            for value in entries.iter() {
                let Some(entry) = value.dyn_ref::<IntersectionObserverEntry>() else {
                    continue;
                };
                let target = entry.target();
                let Some(key) = target.get_attribute(reveal::KEY_ATTRIBUTE).as_deref().and_then(reveal::parse_key)
                else {
                    continue;
                };
                reports.push(Intersection { key, is_intersecting: entry.is_intersecting() });
                elements.push((key, target));
            }

            for key in tracker.borrow_mut().on_intersections(reports) {
                let Some((_, el)) = elements.iter().find(|(k, _)| *k == key) else {
                    continue;
                };
                if let Some(html) = el.dyn_ref::<HtmlElement>() {
                    if let Err(err) = dom::set_style(html, "animation", REVEAL_ANIMATION) {
                        log::warn!("reveal animation not applied: {err}");
                    }
                }
                observer.unobserve(el);
            }
        }) as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>)
    };

    // Targets stay visible unless an observer exists to reveal them.
    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
    options.set_root_margin(REVEAL_ROOT_MARGIN);
    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
        .map_err(dom::js_error("IntersectionObserver"))?;
    callback.forget();

    for (key, target) in targets.iter().enumerate() {
        target
            .set_attribute(reveal::KEY_ATTRIBUTE, &key.to_string())
            .map_err(dom::js_error("setAttribute"))?;
        dom::set_style(target, "opacity", "0")?;
        tracker.borrow_mut().track(key);
        observer.observe(target);
    }
    Ok(())
}

fn mount_card_stagger() -> Result<(), MountError> {
    let doc = dom::document()?;
    for (selector, step) in [(SEL_PROJECT_CARDS, PROJECT_CARD_STAGGER_S), (SEL_SKILL_CARDS, SKILL_CARD_STAGGER_S)] {
        for (index, card) in dom::query_all(&doc, selector)?.iter().enumerate() {
            dom::set_style(card, "animation-delay", &reveal::stagger_delay(index, step))?;
        }
    }
    Ok(())
}

fn mount_hero() -> Result<(), MountError> {
    dom::on_load(|| report("hero animation", animate_hero()))
}

fn animate_hero() -> Result<(), MountError> {
    let doc = dom::document()?;
    if let Some(hero) = dom::query(&doc, SEL_HERO)? {
        dom::set_style(&hero, "animation", HERO_ANIMATION)?;
    }
    Ok(())
}

// ── Anchors ─────────────────────────────────────────────────────

fn mount_anchors(config: &PageConfig) -> Result<(), MountError> {
    let window = dom::window()?;
    let doc = window.document().ok_or(MountError::NoDocument)?;
    let navbar_offset = config.anchor_offset_px;

    for link in dom::query_all(&doc, SEL_ANCHORS)? {
        let window = window.clone();
        let doc = doc.clone();
        let el = link.clone();
        dom::listen(&link, "click", move |event| {
            let Some(href) = el.get_attribute("href") else {
                return;
            };
            let Some(selector) = anchor::target_selector(&href) else {
                return;
            };
            event.prevent_default();
            match doc.query_selector(selector) {
                Ok(Some(target)) => {
                    if let Some(target) = target.dyn_ref::<HtmlElement>() {
                        let options = ScrollToOptions::new();
                        options.set_top(anchor::scroll_top_for(f64::from(target.offset_top()), navbar_offset));
                        options.set_behavior(ScrollBehavior::Smooth);
                        window.scroll_to_with_scroll_to_options(&options);
                    }
                }
                Ok(None) => {}
                Err(err) => log::warn!("bad anchor target {selector}: {}", dom::describe(&err)),
            }
        })?;
    }
    Ok(())
}

// ── Contact form ────────────────────────────────────────────────

struct FieldElements {
    field: Field,
    input: HtmlElement,
    error: HtmlElement,
}

struct ContactFields(Vec<FieldElements>);

impl ContactFields {
    fn find(doc: &web_sys::Document) -> Result<Self, MountError> {
        Field::ALL
            .into_iter()
            .map(|field| -> Result<FieldElements, MountError> {
                Ok(FieldElements {
                    field,
                    input: dom::by_id(doc, field.input_id())?,
                    error: dom::by_id(doc, field.error_id())?,
                })
            })
            .collect::<Result<Vec<_>, MountError>>()
            .map(Self)
    }

    fn get(&self, field: Field) -> Option<&FieldElements> {
        self.0.iter().find(|f| f.field == field)
    }

    fn read(&self) -> ContactForm {
        let mut values = ContactForm::default();
        for f in &self.0 {
            let value = dom::field_value(&f.input);
            match f.field {
                Field::Name => values.name = value,
                Field::Email => values.email = value,
                Field::Message => values.message = value,
            }
        }
        values
    }

    fn show_error(&self, field: Field, text: &str) {
        if let Some(f) = self.get(field) {
            f.error.set_text_content(Some(text));
        }
    }
}

fn mount_contact_form(config: &PageConfig) -> Result<(), MountError> {
    let doc = dom::document()?;
    let form_el: HtmlFormElement = dom::by_id(&doc, ID_CONTACT_FORM)?;
    let status: HtmlElement = dom::by_id(&doc, ID_FORM_STATUS)?;
    let fields = Rc::new(ContactFields::find(&doc)?);

    for field in Field::ALL {
        let Some(input) = fields.get(field).map(|f| f.input.clone()) else {
            continue;
        };
        let fields = Rc::clone(&fields);
        dom::listen(&input, "blur", move |_| {
            let Some(f) = fields.get(field) else {
                return;
            };
            let text = form::validate_field(field, &dom::field_value(&f.input)).map_or("", form::FieldError::message);
            fields.show_error(field, text);
        })?;
    }

    let clear_after_ms = config.status_clear_ms;
    let pending_clear: Rc<RefCell<Option<Timeout>>> = Rc::default();
    let target = form_el.clone();
    dom::listen(&form_el, "submit", move |event| {
        event.prevent_default();
        let outcome = form::submit(&fields.read());

        for (field, text) in outcome.report().field_texts() {
            fields.show_error(field, text);
        }
        status.set_text_content(Some(outcome.status_text()));
        let (add, remove) = outcome.status_class();
        if let Err(err) = dom::set_class(&status, add, true).and_then(|()| dom::set_class(&status, remove, false)) {
            log::warn!("form status class not applied: {err}");
        }

        // A stale clear must not wipe the status of this submission.
        drop(pending_clear.borrow_mut().take());
        if outcome == SubmitOutcome::Sent {
            target.reset();
            let status = status.clone();
            *pending_clear.borrow_mut() = Some(Timeout::new(clear_after_ms, move || {
                status.set_text_content(Some(""));
                if let Err(err) = dom::set_class(&status, form::CLASS_SUCCESS, false) {
                    log::warn!("form status class not cleared: {err}");
                }
            }));
        }
    })
}

// ── Page errors ─────────────────────────────────────────────────

/// Log uncaught errors and unhandled promise rejections. Mounted first so
/// failures inside the other mounts are caught too.
fn mount_error_listener() -> Result<(), MountError> {
    let window = dom::window()?;
    dom::listen(&window, "error", |event| {
        let message = event.dyn_ref::<ErrorEvent>().map_or_else(|| event.type_(), ErrorEvent::message);
        log::error!("An error occurred: {message}");
    })?;
    dom::listen(&window, "unhandledrejection", |event| {
        let reason = event
            .dyn_ref::<PromiseRejectionEvent>()
            .map_or_else(|| event.type_(), |rejection| dom::describe(&rejection.reason()));
        log::error!("An error occurred: {reason}");
    })
}
