//! Slide-in navigation drawer opened from the header menu button.

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::content::profile::{PROFILE, Profile};
use crate::content::{NAV_LINKS, is_active};
use crate::state::ui::UiState;

#[component]
pub fn Sidebar() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let location = use_location();
    let pathname = location.pathname;

    // Route changes close the drawer even when triggered from elsewhere.
    Effect::new(move |previous: Option<String>| {
        let current = pathname.get();
        if previous.is_some_and(|p| p != current) {
            ui.update(|u| {
                u.close_sidebar();
            });
        }
        current
    });

    let close = move |_| {
        ui.update(|u| {
            u.close_sidebar();
        });
    };

    view! {
        <Show when=move || ui.with(|u| u.sidebar_open)>
            <div class="sidebar-backdrop" on:click=close></div>
            <aside class="sidebar" aria-label="Site navigation">
                <div class="sidebar__top">
                    <button
                        type="button"
                        class="sidebar__close"
                        aria-label="Close sidebar menu"
                        on:click=close
                    >
                        "✕"
                    </button>
                </div>
                <div class="sidebar__logo">
                    <span class="sidebar__initials">{PROFILE.initials}</span>
                    <span class="sidebar__name">{PROFILE.short_name}</span>
                </div>
                <nav class="sidebar__nav">
                    {NAV_LINKS
                        .iter()
                        .map(|link| {
                            let active = move || is_active(link, &pathname.get());
                            view! {
                                <a
                                    href=link.path
                                    class="sidebar__link"
                                    class:sidebar__link--active=active
                                    aria-current=move || active().then_some("page")
                                    on:click=close
                                >
                                    {link.label}
                                </a>
                            }
                        })
                        .collect_view()}
                </nav>
                <div class="sidebar__contact">
                    <p class="sidebar__contact-title">"Get in touch"</p>
                    <a class="sidebar__email" href=PROFILE.mailto()>{PROFILE.email}</a>
                    <div class="sidebar__social">
                        <a href=PROFILE.github target="_blank" rel="noopener noreferrer">"GitHub"</a>
                        <a href=PROFILE.linkedin target="_blank" rel="noopener noreferrer" title=Profile::display_url(PROFILE.linkedin)>
                            "LinkedIn"
                        </a>
                    </div>
                </div>
            </aside>
        </Show>
    }
}
