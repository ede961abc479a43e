//! # client
//!
//! Leptos + WASM frontend for the personal portfolio site.
//!
//! Pages and components render static content from `content`. The
//! interactive parts are the theme coordinator (`state::theme`, bound to the
//! browser by `util::theme_dom` and `util::timers`), toasts, the contact form
//! hand-off, and scroll-driven effects. The `ssr` feature builds the same
//! tree for server rendering; `hydrate` adds the browser bindings.

pub mod app;
pub mod components;
pub mod content;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: attach to the server-rendered markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Debug) {
        leptos::logging::warn!("console logger already installed: {err}");
    }
    leptos::mount::hydrate_body(app::App);
}
