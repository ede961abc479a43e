//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Meta, MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::StaticSegment;
use leptos_router::components::{Redirect, Route, Router, Routes};

use crate::components::footer::Footer;
use crate::components::header::Header;
use crate::components::scroll_indicator::ScrollIndicator;
use crate::components::smooth_scroll::SmoothScroll;
use crate::components::theme_effect::ThemeEffect;
use crate::components::toast::{ToastContainer, Toasts};
use crate::content::profile::PROFILE;
use crate::pages::{
    about::AboutPage, contact::ContactPage, experience::ExperiencePage, home::HomePage, projects::ProjectsPage,
};
use crate::state::theme_context::ThemeContext;
use crate::state::ui::UiState;
use crate::util::theme_dom;

/// HTML shell rendered on the server for SSR + hydration.
///
/// The inline boot script applies the stored theme class before first paint,
/// so a dark-theme visitor never sees a light frame while WASM loads.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <link rel="icon" type="image/svg+xml" href="/favicon.svg"/>
                <script inner_html=theme_dom::boot_script()></script>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the theme, toast, and UI contexts, then lays out the site chrome
/// around the routed pages.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let theme = ThemeContext::provide();
    Toasts::provide();
    provide_context(RwSignal::new(UiState::default()));

    // Effects only run in the browser: read the stored preference once, then
    // mirror every resolved change onto <html>.
    Effect::new(move || theme.initialize());
    Effect::new(move || {
        if theme.is_initialized() {
            theme_dom::apply(theme.resolved());
        }
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/portfolio.css"/>
        <Title text=format!("{} | Portfolio", PROFILE.name)/>
        <Meta name="description" content=PROFILE.tagline/>

        <Router>
            <ThemeEffect/>
            <ScrollIndicator/>
            <Header/>
            <SmoothScroll>
                <main class="site-main">
                    <Routes fallback=|| view! { <Redirect path="/"/> }>
                        <Route path=StaticSegment("") view=HomePage/>
                        <Route path=StaticSegment("about") view=AboutPage/>
                        <Route path=StaticSegment("projects") view=ProjectsPage/>
                        <Route path=StaticSegment("experience") view=ExperiencePage/>
                        <Route path=StaticSegment("contact") view=ContactPage/>
                    </Routes>
                </main>
                <Footer/>
            </SmoothScroll>
            <ToastContainer/>
        </Router>
    }
}
