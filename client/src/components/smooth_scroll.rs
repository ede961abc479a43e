//! Page wrapper that turns in-page anchor clicks into smooth scrolls.

use leptos::prelude::*;

use crate::util::scroll::install_smooth_anchor_scroll;

#[component]
pub fn SmoothScroll(children: Children) -> impl IntoView {
    install_smooth_anchor_scroll();

    view! { <div class="smooth-scroll">{children()}</div> }
}
