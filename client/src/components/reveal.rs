//! Wrappers that animate their children in when scrolled into view.

use leptos::prelude::*;

use crate::util::in_view::{InViewOptions, use_in_view};
use crate::util::reveal::{Reveal, RevealDirection};

/// Generic reveal wrapper. Defaults to a fade that rises 20 px.
#[component]
pub fn FadeIn(
    children: Children,
    #[prop(optional)] reveal: Option<Reveal>,
    #[prop(optional)] delay: f64,
    #[prop(optional)] direction: Option<RevealDirection>,
    #[prop(optional, into)] class: String,
    #[prop(default = true)] once: bool,
) -> impl IntoView {
    let mut reveal = reveal.unwrap_or_default().delay(delay);
    if let Some(direction) = direction {
        reveal = reveal.direction(direction);
    }
    let options = if once { InViewOptions::once() } else { InViewOptions::default() };
    let (node_ref, in_view) = use_in_view(options);

    view! {
        <div node_ref=node_ref class=class style=move || reveal.style(in_view.get())>
            {children()}
        </div>
    }
}

/// Slide-up preset of [`FadeIn`].
#[component]
pub fn SlideUp(children: Children, #[prop(optional)] delay: f64, #[prop(optional, into)] class: String) -> impl IntoView {
    view! {
        <FadeIn reveal=Reveal::slide_up() delay=delay class=class>
            {children()}
        </FadeIn>
    }
}
