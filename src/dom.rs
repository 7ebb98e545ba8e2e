//! Thin web-sys helpers shared by the mount functions.
//!
//! Lookups return [`MountError`] instead of panicking so a missing element
//! only disables the controller that needed it.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Document, Element, EventTarget, HtmlElement, HtmlInputElement, HtmlTextAreaElement, Storage, Window,
};

use crate::consts::THEME_STORAGE_KEY;
use crate::error::MountError;
use crate::theme::{PreferenceStore, Theme};

pub fn window() -> Result<Window, MountError> {
    web_sys::window().ok_or(MountError::NoWindow)
}

pub fn document() -> Result<Document, MountError> {
    window()?.document().ok_or(MountError::NoDocument)
}

/// Best-effort text for a thrown JS value.
pub fn describe(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}

pub fn js_error(context: &'static str) -> impl FnOnce(JsValue) -> MountError {
    move |value| MountError::Js { context, message: describe(&value) }
}

/// First element matching `selector`, if any.
pub fn query(doc: &Document, selector: &'static str) -> Result<Option<HtmlElement>, MountError> {
    let found = doc.query_selector(selector).map_err(js_error("querySelector"))?;
    Ok(found.and_then(|el| el.dyn_ref::<HtmlElement>().cloned()))
}

/// First element matching `selector`, or [`MountError::MissingElement`].
pub fn require(doc: &Document, selector: &'static str) -> Result<HtmlElement, MountError> {
    query(doc, selector)?.ok_or(MountError::MissingElement { selector })
}

/// Every element matching `selector`, in document order.
pub fn query_all(doc: &Document, selector: &'static str) -> Result<Vec<HtmlElement>, MountError> {
    let list = doc.query_selector_all(selector).map_err(js_error("querySelectorAll"))?;
    Ok((0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_ref::<HtmlElement>().cloned())
        .collect())
}

/// Element with `id`, cast to `T`.
pub fn by_id<T: JsCast + Clone>(doc: &Document, id: &'static str) -> Result<T, MountError> {
    doc.get_element_by_id(id)
        .and_then(|el| el.dyn_ref::<T>().cloned())
        .ok_or(MountError::MissingElement { selector: id })
}

pub fn set_style(el: &HtmlElement, property: &str, value: &str) -> Result<(), MountError> {
    el.style().set_property(property, value).map_err(js_error("style.setProperty"))
}

/// Add `class` when `on`, remove it otherwise.
pub fn set_class(el: &Element, class: &str, on: bool) -> Result<(), MountError> {
    el.class_list()
        .toggle_with_force(class, on)
        .map(|_| ())
        .map_err(js_error("classList.toggle"))
}

/// Current value of an `<input>` or `<textarea>`.
pub fn field_value(el: &HtmlElement) -> String {
    if let Some(input) = el.dyn_ref::<HtmlInputElement>() {
        return input.value();
    }
    if let Some(area) = el.dyn_ref::<HtmlTextAreaElement>() {
        return area.value();
    }
    String::new()
}

/// Register `handler` for `event` on `target` for the lifetime of the page.
pub fn listen<F>(target: &EventTarget, event: &str, handler: F) -> Result<(), MountError>
where
    F: FnMut(web_sys::Event) + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web_sys::Event)>);
    target
        .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
        .map_err(js_error("addEventListener"))?;
    closure.forget();
    Ok(())
}

/// Run `handler` once the window `load` event has fired, immediately if it
/// already has.
pub fn on_load<F>(handler: F) -> Result<(), MountError>
where
    F: FnOnce() + 'static,
{
    let window = window()?;
    let doc = window.document().ok_or(MountError::NoDocument)?;
    if doc.ready_state() == "complete" {
        handler();
        return Ok(());
    }
    let mut handler = Some(handler);
    listen(&window, "load", move |_| {
        if let Some(handler) = handler.take() {
            handler();
        }
    })
}

/// Theme preference backed by `localStorage`.
///
/// Storage can be unavailable (private mode, sandboxed frames); reads then
/// return nothing and writes are dropped with a warning.
pub struct LocalPreference {
    storage: Option<Storage>,
}

impl LocalPreference {
    pub fn open() -> Self {
        let storage = match web_sys::window().map(|w| w.local_storage()) {
            Some(Ok(storage)) => storage,
            Some(Err(err)) => {
                log::warn!("localStorage unavailable: {}", describe(&err));
                None
            }
            None => None,
        };
        Self { storage }
    }
}

impl PreferenceStore for LocalPreference {
    fn load(&self) -> Option<String> {
        let storage = self.storage.as_ref()?;
        match storage.get_item(THEME_STORAGE_KEY) {
            Ok(value) => value,
            Err(err) => {
                log::warn!("theme preference read failed: {}", describe(&err));
                None
            }
        }
    }

    fn save(&mut self, theme: Theme) {
        let Some(storage) = self.storage.as_ref() else {
            return;
        };
        if let Err(err) = storage.set_item(THEME_STORAGE_KEY, theme.as_str()) {
            log::warn!("theme preference write failed: {}", describe(&err));
        }
    }
}
