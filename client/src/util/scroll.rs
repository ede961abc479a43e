//! Scroll-driven effects: page scroll signal, header shrink, progress bar,
//! and smooth in-page anchor navigation.

use leptos::prelude::*;

#[cfg(test)]
#[path = "scroll_test.rs"]
mod scroll_test;

/// Scroll offset past which the header switches to its frosted style.
pub const HEADER_SCROLLED_THRESHOLD: f64 = 10.0;
pub const HEADER_MAX_HEIGHT: f64 = 92.0;
pub const HEADER_MIN_HEIGHT: f64 = 64.0;
/// Scroll distance over which the header shrinks.
pub const HEADER_SHRINK_RANGE: f64 = 100.0;
/// Scroll distance over which the header border fades in.
pub const HEADER_BORDER_RANGE: f64 = 50.0;
/// Progress past which the scroll indicator appears.
pub const INDICATOR_VISIBLE_AFTER: f64 = 0.02;
/// Space left above an anchor target for the fixed header.
pub const ANCHOR_OFFSET: f64 = 80.0;

/// Map `value` from `[from_start, from_end]` onto `[to_start, to_end]`,
/// clamped to the output range.
pub fn interpolate(value: f64, (from_start, from_end): (f64, f64), (to_start, to_end): (f64, f64)) -> f64 {
    let span = from_end - from_start;
    if span == 0.0 || !value.is_finite() {
        return to_start;
    }
    let t = ((value - from_start) / span).clamp(0.0, 1.0);
    to_start + (to_end - to_start) * t
}

pub fn header_is_scrolled(scroll_y: f64) -> bool {
    scroll_y > HEADER_SCROLLED_THRESHOLD
}

pub fn header_height(scroll_y: f64) -> f64 {
    interpolate(scroll_y, (0.0, HEADER_SHRINK_RANGE), (HEADER_MAX_HEIGHT, HEADER_MIN_HEIGHT))
}

pub fn header_border_opacity(scroll_y: f64) -> f64 {
    interpolate(scroll_y, (0.0, HEADER_BORDER_RANGE), (0.0, 1.0))
}

/// Fraction of the scrollable document already passed, in `[0, 1]`.
pub fn scroll_progress(scroll_y: f64, document_height: f64, viewport_height: f64) -> f64 {
    let scrollable = document_height - viewport_height;
    if scrollable <= 0.0 || !scroll_y.is_finite() {
        return 0.0;
    }
    (scroll_y / scrollable).clamp(0.0, 1.0)
}

pub fn indicator_visible(progress: f64) -> bool {
    progress > INDICATOR_VISIBLE_AFTER
}

/// Document-space Y to scroll to so a target with viewport-relative `top`
/// lands just below the header.
pub fn anchor_scroll_target(target_top: f64, scroll_y: f64) -> f64 {
    (target_top + scroll_y - ANCHOR_OFFSET).max(0.0)
}

/// Element id an in-page link points at, or `None` for bare `#` and
/// non-fragment links.
pub fn fragment_target(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

/// Current measurements of the window scroll position.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollMetrics {
    pub scroll_y: f64,
    pub document_height: f64,
    pub viewport_height: f64,
}

impl ScrollMetrics {
    pub fn progress(&self) -> f64 {
        scroll_progress(self.scroll_y, self.document_height, self.viewport_height)
    }
}

#[cfg(feature = "hydrate")]
fn read_metrics() -> ScrollMetrics {
    let Some(window) = web_sys::window() else {
        return ScrollMetrics::default();
    };
    let scroll_y = window.scroll_y().unwrap_or(0.0);
    let viewport_height = window.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    let document_height = window
        .document()
        .and_then(|d| d.document_element())
        .map_or(0.0, |el| f64::from(el.scroll_height()));
    ScrollMetrics { scroll_y, document_height, viewport_height }
}

/// Reactive window scroll metrics, updated on every `scroll` and `resize`.
/// Stays at the default (top of page) during SSR.
pub fn use_scroll_metrics() -> ReadSignal<ScrollMetrics> {
    let (metrics, set_metrics) = signal(ScrollMetrics::default());

    #[cfg(feature = "hydrate")]
    {
        // Read after hydration so the first client frame matches the SSR markup.
        Effect::new(move || set_metrics.set(read_metrics()));
        let on_scroll = window_event_listener(leptos::ev::scroll, move |_| set_metrics.set(read_metrics()));
        let on_resize = window_event_listener(leptos::ev::resize, move |_| set_metrics.set(read_metrics()));
        on_cleanup(move || {
            on_scroll.remove();
            on_resize.remove();
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = set_metrics;
    }

    metrics
}

/// Intercept clicks on `a[href^="#"]` and scroll smoothly to the target,
/// leaving room for the fixed header.
pub fn install_smooth_anchor_scroll() {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast;

        let handle = window_event_listener(leptos::ev::click, |ev| {
            let Some(target) = ev.target().and_then(|t| t.dyn_into::<web_sys::Element>().ok()) else {
                return;
            };
            let Ok(Some(anchor)) = target.closest("a[href^=\"#\"]") else {
                return;
            };
            let Some(href) = anchor.get_attribute("href") else {
                return;
            };
            let Some(id) = fragment_target(&href) else {
                return;
            };
            let Some(window) = web_sys::window() else {
                return;
            };
            let Some(el) = window.document().and_then(|d| d.get_element_by_id(id)) else {
                return;
            };
            ev.prevent_default();
            let top = anchor_scroll_target(el.get_bounding_client_rect().top(), window.scroll_y().unwrap_or(0.0));
            let options = web_sys::ScrollToOptions::new();
            options.set_top(top);
            options.set_behavior(web_sys::ScrollBehavior::Smooth);
            window.scroll_to_with_scroll_to_options(&options);
        });
        on_cleanup(move || handle.remove());
    }
}
