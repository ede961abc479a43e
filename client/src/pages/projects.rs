use leptos::prelude::*;

use crate::components::project_grid::ProjectGrid;

#[component]
pub fn ProjectsPage() -> impl IntoView {
    view! {
        <div class="page">
            <ProjectGrid/>
        </div>
    }
}
