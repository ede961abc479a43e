use leptos::prelude::*;

use crate::components::about::AboutSection;

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <div class="page">
            <AboutSection/>
        </div>
    }
}
