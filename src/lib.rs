//! Client-side interactivity for the static portfolio page.
//!
//! This crate is compiled to WebAssembly and attaches to markup that is
//! already rendered. Every controller is split into a browser-independent
//! core, which owns the state machine and is tested natively, and glue in
//! [`mount`] that reads the DOM, calls the core, and writes presentation
//! state back. The glue only exists with the `hydrate` feature.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`typing`] | Typing-text animation state machine |
//! | [`scroll`] | Active section, scroll indicator and navbar shadow |
//! | [`theme`] | Light/dark preference |
//! | [`menu`] | Mobile navigation menu |
//! | [`anchor`] | In-page anchor scroll targets |
//! | [`reveal`] | One-shot fade-in reveal and card stagger delays |
//! | [`form`] | Contact form validation and submission outcome |
//! | [`debounce`] | Trailing-edge debounce bookkeeping |
//! | [`config`] | Page configuration with defaults |
//! | [`consts`] | Default timings, thresholds, selectors |
//! | [`error`] | Config and mount error types |

pub mod anchor;
pub mod config;
pub mod consts;
pub mod debounce;
pub mod error;
pub mod form;
pub mod menu;
pub mod reveal;
pub mod scroll;
pub mod theme;
pub mod typing;

#[cfg(feature = "hydrate")]
mod dom;
#[cfg(feature = "hydrate")]
pub mod mount;

/// WASM entry point: install panic reporting and logging, then mount every
/// controller onto the page.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) { log::Level::Debug } else { log::Level::Info };
    if let Err(err) = console_log::init_with_level(level) {
        web_sys::console::warn_1(&format!("logger already initialised: {err}").into());
    }
    mount::start();
}
