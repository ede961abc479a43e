use leptos::prelude::*;

use crate::components::contact_form::ContactSection;

#[component]
pub fn ContactPage() -> impl IntoView {
    view! {
        <div class="page">
            <ContactSection/>
        </div>
    }
}
