//! Thin reading-progress bar pinned to the top of the viewport.

use leptos::prelude::*;

use crate::util::scroll::{self, ScrollMetrics};

#[component]
pub fn ScrollIndicator() -> impl IntoView {
    let metrics = scroll::use_scroll_metrics();
    let progress = move || metrics.with(ScrollMetrics::progress);

    view! {
        <div
            class="scroll-indicator"
            class:scroll-indicator--visible=move || scroll::indicator_visible(progress())
            style:transform=move || format!("scaleX({:.4})", progress())
            aria-hidden="true"
        ></div>
    }
}
