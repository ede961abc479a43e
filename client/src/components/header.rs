//! Fixed site header: menu button, monogram, theme toggle.
//!
//! SYSTEM CONTEXT
//! ==============
//! Shrinks and frosts as the page scrolls (`util::scroll`), owns the sidebar
//! open flag in `UiState`, and hosts the `ThemeToggle`.

use leptos::prelude::*;

use crate::components::sidebar::Sidebar;
use crate::components::theme_toggle::ThemeToggle;
use crate::content::profile::PROFILE;
use crate::state::ui::UiState;
use crate::util::scroll::{self, HEADER_MAX_HEIGHT};

#[component]
pub fn Header() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let metrics = scroll::use_scroll_metrics();

    let scrolled = move || scroll::header_is_scrolled(metrics.get().scroll_y);
    let height = move || format!("{:.1}px", scroll::header_height(metrics.get().scroll_y));
    let border_opacity = move || format!("{:.2}", scroll::header_border_opacity(metrics.get().scroll_y));

    view! {
        <Sidebar/>
        <div class="header-spacer" style=format!("height: {HEADER_MAX_HEIGHT}px")></div>
        <header class="site-header" class:site-header--scrolled=scrolled style:height=height>
            <div class="site-header__inner">
                <button
                    type="button"
                    class="site-header__menu"
                    aria-label=move || ui.with(UiState::menu_label)
                    aria-expanded=move || ui.with(|u| u.sidebar_open).to_string()
                    on:click=move |_| ui.update(UiState::toggle_sidebar)
                >
                    "☰"
                </button>
                <a href="/" class="site-header__logo">
                    <span class="site-header__initials">{PROFILE.initials}</span>
                    <span class="site-header__name">{PROFILE.name}</span>
                </a>
                <div class="site-header__actions">
                    <ThemeToggle/>
                </div>
            </div>
            <div class="site-header__border" style:opacity=border_opacity></div>
        </header>
    }
}
