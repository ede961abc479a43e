//! Viewport visibility tracking.
//!
//! DESIGN
//! ======
//! `VisibilityLatch` is the pure part: it decides what an intersection
//! report means for the visible flag and whether observation should stop.
//! `use_in_view` wires it to an `IntersectionObserver` on the hydrate build
//! and stays permanently hidden during SSR.

use leptos::html::Div;
use leptos::prelude::*;

#[cfg(test)]
#[path = "in_view_test.rs"]
mod in_view_test;

pub const DEFAULT_THRESHOLD: f64 = 0.1;
pub const DEFAULT_ROOT_MARGIN: &str = "0px";

#[derive(Clone, Debug, PartialEq)]
pub struct InViewOptions {
    /// Fraction of the element that must be visible, `0.0..=1.0`.
    pub threshold: f64,
    /// CSS margin applied around the viewport.
    pub root_margin: String,
    /// Keep the element visible after its first appearance.
    pub trigger_once: bool,
}

impl Default for InViewOptions {
    fn default() -> Self {
        Self { threshold: DEFAULT_THRESHOLD, root_margin: DEFAULT_ROOT_MARGIN.to_owned(), trigger_once: false }
    }
}

impl InViewOptions {
    pub fn once() -> Self {
        Self { trigger_once: true, ..Self::default() }
    }

    pub fn threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold.clamp(0.0, 1.0);
        self
    }

    pub fn root_margin(mut self, root_margin: impl Into<String>) -> Self {
        self.root_margin = root_margin.into();
        self
    }
}

/// Result of feeding one intersection report to a [`VisibilityLatch`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LatchUpdate {
    pub visible: bool,
    pub stop_observing: bool,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct VisibilityLatch {
    trigger_once: bool,
    visible: bool,
}

impl VisibilityLatch {
    pub fn new(trigger_once: bool) -> Self {
        Self { trigger_once, visible: false }
    }

    pub fn observe(&mut self, intersecting: bool) -> LatchUpdate {
        if self.is_latched() {
            return LatchUpdate { visible: true, stop_observing: true };
        }
        self.visible = intersecting;
        LatchUpdate { visible: intersecting, stop_observing: self.is_latched() }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// `true` once a trigger-once latch has seen the element.
    pub fn is_latched(&self) -> bool {
        self.trigger_once && self.visible
    }
}

/// Attach the returned `NodeRef` to an element to get a signal that follows
/// its visibility.
pub fn use_in_view(options: InViewOptions) -> (NodeRef<Div>, ReadSignal<bool>) {
    let node_ref = NodeRef::<Div>::new();
    let (in_view, set_in_view) = signal(false);

    #[cfg(feature = "hydrate")]
    {
        use std::cell::{Cell, RefCell};
        use std::rc::Rc;
        use wasm_bindgen::JsCast;
        use wasm_bindgen::prelude::Closure;

        let attached = Rc::new(Cell::new(false));
        Effect::new(move || {
            let Some(el) = node_ref.get() else {
                return;
            };
            if attached.replace(true) {
                return;
            }

            let latch = Rc::new(RefCell::new(VisibilityLatch::new(options.trigger_once)));
            let callback = Closure::<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>::new(
                move |entries: js_sys::Array, observer: web_sys::IntersectionObserver| {
                    let Some(entry) = entries.get(0).dyn_into::<web_sys::IntersectionObserverEntry>().ok() else {
                        return;
                    };
                    let update = latch.borrow_mut().observe(entry.is_intersecting());
                    set_in_view.set(update.visible);
                    if update.stop_observing {
                        observer.unobserve(&entry.target());
                    }
                },
            );

            let init = web_sys::IntersectionObserverInit::new();
            init.set_threshold(&wasm_bindgen::JsValue::from_f64(options.threshold));
            init.set_root_margin(&options.root_margin);
            match web_sys::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init) {
                Ok(observer) => {
                    observer.observe(&el);
                    callback.forget();
                }
                Err(err) => {
                    // Without an observer the content would stay hidden forever.
                    leptos::logging::warn!("IntersectionObserver unavailable: {err:?}");
                    set_in_view.set(true);
                }
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (options, set_in_view);
    }

    (node_ref, in_view)
}
