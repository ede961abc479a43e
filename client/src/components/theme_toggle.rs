//! Header button that flips between light and dark.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reads and drives the shared `ThemeContext`. The icon is only rendered once
//! the coordinator has read the stored preference, so the server markup and
//! the first client frame agree.

use leptos::prelude::*;

use crate::state::theme::{ResolvedTheme, ToggleOutcome};
use crate::state::theme_context::ThemeContext;

#[cfg(test)]
#[path = "theme_toggle_test.rs"]
mod theme_toggle_test;

/// Icon glyph for the currently applied theme.
pub fn theme_icon(resolved: ResolvedTheme) -> &'static str {
    match resolved {
        ResolvedTheme::Light => "☀",
        ResolvedTheme::Dark => "☾",
    }
}

/// Accessible label describing what a click will do.
pub fn toggle_label(resolved: ResolvedTheme, transitioning: bool) -> &'static str {
    if transitioning {
        return "Cancel theme animation";
    }
    match resolved {
        ResolvedTheme::Light => "Switch to dark theme",
        ResolvedTheme::Dark => "Switch to light theme",
    }
}

/// Click handler body: switch themes, or reset an animation in progress.
pub fn toggle_theme(theme: ThemeContext) -> Option<ToggleOutcome> {
    let outcome = theme.toggle();
    match outcome {
        Some(ToggleOutcome::Switched { resolved, .. }) => leptos::logging::log!("theme switched to {resolved}"),
        Some(ToggleOutcome::Cancelled) => leptos::logging::log!("theme animation cancelled"),
        None => leptos::logging::warn!("theme context disposed; toggle ignored"),
    }
    outcome
}

#[component]
pub fn ThemeToggle() -> impl IntoView {
    let theme = ThemeContext::expect();

    let ready = move || theme.is_initialized();
    let on_click = move |_| {
        toggle_theme(theme);
    };

    view! {
        <button
            type="button"
            class="theme-toggle"
            class:theme-toggle--busy=move || theme.transitioning()
            aria-busy=move || theme.transitioning().to_string()
            aria-label=move || {
                if ready() {
                    toggle_label(theme.resolved(), theme.transitioning())
                } else {
                    "Toggle theme"
                }
            }
            on:click=on_click
        >
            <Show
                when=ready
                fallback=|| view! { <span class="theme-toggle__placeholder"></span> }
            >
                <span
                    class="theme-toggle__icon"
                    class:theme-toggle__icon--dark=move || theme.resolved().is_dark()
                >
                    {move || theme_icon(theme.resolved())}
                </span>
            </Show>
        </button>
    }
}
