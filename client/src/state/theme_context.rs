//! Reactive handle around the browser-backed `ThemeCoordinator`.
//!
//! DESIGN
//! ======
//! The coordinator lives in one `RwSignal` owned by `App` and is handed to
//! consumers through Leptos context as this `Copy` handle. Timer callbacks
//! and system color-scheme events write back through the same signal, so
//! every reader observes one consistent `ThemeState`.

use leptos::prelude::*;

use super::theme::{ResolvedTheme, ThemeCoordinator, ThemeState, ToggleOutcome};
use crate::util::theme_dom::{self, LocalPreferenceStore};
use crate::util::timers::BrowserTimers;

#[cfg(test)]
#[path = "theme_context_test.rs"]
mod theme_context_test;

pub type BrowserThemeCoordinator = ThemeCoordinator<LocalPreferenceStore, BrowserTimers>;

#[derive(Clone, Copy)]
pub struct ThemeContext {
    inner: RwSignal<BrowserThemeCoordinator>,
}

impl ThemeContext {
    /// Create the coordinator and wire its timers back into the signal.
    pub fn new() -> Self {
        let inner = RwSignal::new(ThemeCoordinator::new(LocalPreferenceStore, BrowserTimers::default()));
        let sink = Callback::new(move |timer| {
            inner.update(|theme| {
                theme.timer_fired(timer);
            });
        });
        inner.update_untracked(|theme| theme.scheduler_mut().bind(sink));
        Self { inner }
    }

    /// Create a context and provide it to descendants.
    pub fn provide() -> Self {
        let ctx = Self::new();
        provide_context(ctx);
        ctx
    }

    pub fn expect() -> Self {
        expect_context::<Self>()
    }

    /// Resolve the persisted preference against the system signal and start
    /// following system changes. Safe to call more than once.
    pub fn initialize(self) {
        if self.inner.with_untracked(BrowserThemeCoordinator::is_initialized) {
            return;
        }
        let system_dark = theme_dom::system_prefers_dark();
        self.inner.update(|theme| {
            theme.initialize(system_dark);
        });
        self.subscribe_to_system_change();
    }

    pub fn toggle(self) -> Option<ToggleOutcome> {
        self.inner.try_update(BrowserThemeCoordinator::toggle)
    }

    pub fn state(self) -> ThemeState {
        self.inner.with(BrowserThemeCoordinator::state)
    }

    pub fn resolved(self) -> ResolvedTheme {
        self.inner.with(BrowserThemeCoordinator::resolved)
    }

    pub fn transitioning(self) -> bool {
        self.inner.with(BrowserThemeCoordinator::is_transitioning)
    }

    pub fn is_initialized(self) -> bool {
        self.inner.with(BrowserThemeCoordinator::is_initialized)
    }

    fn subscribe_to_system_change(self) {
        let inner = self.inner;
        theme_dom::on_system_change(move |dark| {
            inner.update(|theme| {
                theme.set_system_dark(dark);
            });
        });
    }
}

impl Default for ThemeContext {
    fn default() -> Self {
        Self::new()
    }
}
