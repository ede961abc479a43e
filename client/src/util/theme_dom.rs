//! Browser glue for theme coordination.
//!
//! Reads and writes the preference in `localStorage`, applies the `light` /
//! `dark` class to the `<html>` element, and watches the
//! `(prefers-color-scheme: dark)` media query. Requires a browser
//! environment.
//!
//! TRADE-OFFS
//! ==========
//! Everything here is best-effort browser-only behavior; SSR and native test
//! builds take the no-op paths so server rendering stays deterministic.

use crate::state::theme::{Preference, PreferenceStore, ResolvedTheme, STORAGE_KEY, StoreError};

#[cfg(test)]
#[path = "theme_dom_test.rs"]
mod theme_dom_test;

#[cfg(feature = "hydrate")]
const DARK_QUERY: &str = "(prefers-color-scheme: dark)";

/// `localStorage`-backed preference slot.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalPreferenceStore;

#[cfg(feature = "hydrate")]
fn local_storage() -> Result<web_sys::Storage, StoreError> {
    web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .ok_or(StoreError::Unavailable)
}

impl PreferenceStore for LocalPreferenceStore {
    fn load(&self) -> Result<Option<Preference>, StoreError> {
        #[cfg(feature = "hydrate")]
        {
            let storage = local_storage()?;
            match storage.get_item(STORAGE_KEY) {
                Ok(Some(raw)) => raw.parse().map(Some),
                Ok(None) => Ok(None),
                Err(_) => Err(StoreError::Unavailable),
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(StoreError::Unavailable)
        }
    }

    fn save(&mut self, preference: Preference) -> Result<(), StoreError> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?
                .set_item(STORAGE_KEY, preference.as_str())
                .map_err(|e| StoreError::Rejected(format!("{e:?}")))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = preference;
            Err(StoreError::Unavailable)
        }
    }
}

/// Current value of the system dark-scheme signal. `false` off-browser.
pub fn system_prefers_dark() -> bool {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.match_media(DARK_QUERY).ok().flatten())
            .map_or(false, |mq| mq.matches())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        false
    }
}

/// Replace the theme class on the `<html>` element and set `color-scheme`.
pub fn apply(theme: ResolvedTheme) {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast;

        let Some(el) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|doc| doc.document_element())
        else {
            return;
        };
        let class_list = el.class_list();
        let _ = class_list.remove_2(
            ResolvedTheme::Light.class_name(),
            ResolvedTheme::Dark.class_name(),
        );
        let _ = class_list.add_1(theme.class_name());
        if let Some(html) = el.dyn_ref::<web_sys::HtmlElement>() {
            let _ = html.style().set_property("color-scheme", theme.class_name());
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = theme;
    }
}

/// Invoke `on_change` with the new dark-scheme value whenever the system
/// setting changes. The listener lives for the rest of the page session.
pub fn on_system_change(on_change: impl Fn(bool) + 'static) {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast;
        use wasm_bindgen::closure::Closure;

        let Some(mq) = web_sys::window().and_then(|w| w.match_media(DARK_QUERY).ok().flatten())
        else {
            leptos::logging::warn!("color-scheme media query unavailable; not following system theme");
            return;
        };
        let listener = Closure::<dyn Fn(web_sys::MediaQueryListEvent)>::new(move |ev: web_sys::MediaQueryListEvent| {
            on_change(ev.matches());
        });
        if mq
            .add_event_listener_with_callback("change", listener.as_ref().unchecked_ref())
            .is_err()
        {
            leptos::logging::warn!("failed to subscribe to color-scheme changes");
            return;
        }
        listener.forget();
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = on_change;
    }
}

/// Inline script for the SSR `<head>`: applies the persisted theme class
/// before first paint so the page never flashes the wrong palette while the
/// WASM bundle loads.
pub fn boot_script() -> String {
    format!(
        "(function(){{try{{var p=localStorage.getItem('{key}');\
if(p!=='light'&&p!=='dark'&&p!=='system')p='system';\
var d=p==='dark'||(p==='system'&&window.matchMedia('(prefers-color-scheme: dark)').matches);\
var t=d?'{dark}':'{light}';var e=document.documentElement;\
e.classList.remove('{light}','{dark}');e.classList.add(t);e.style.colorScheme=t;\
}}catch(_){{}}}})();",
        key = STORAGE_KEY,
        light = ResolvedTheme::Light.class_name(),
        dark = ResolvedTheme::Dark.class_name(),
    )
}
