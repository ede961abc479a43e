//! Work history and leadership roles.

use leptos::prelude::*;

use crate::components::reveal::{FadeIn, SlideUp};
use crate::content::profile::{EXPERIENCE, LEADERSHIP, Role};
use crate::util::reveal::Reveal;

#[component]
pub fn ExperiencePage() -> impl IntoView {
    // Cards follow the heading in 0.2 s steps.
    const STEP: f64 = 0.2;

    view! {
        <div class="page">
            <section class="section" id="experience">
                <div class="container">
                    <SlideUp class="section__intro">
                        <h2 class="heading heading--center">
                            <span class="heading__index">"03."</span>
                            "Work Experience"
                        </h2>
                        <p class="section__lead">
                            "My professional journey and the roles where I've made an impact."
                        </p>
                    </SlideUp>

                    <div class="timeline">
                        {EXPERIENCE
                            .iter()
                            .enumerate()
                            .map(|(i, role)| view! {
                                <FadeIn reveal=Reveal::slide_up().staggered(i + 1, STEP)>
                                    <RoleCard role=*role/>
                                </FadeIn>
                            })
                            .collect_view()}

                        <FadeIn reveal=Reveal::slide_up().staggered(EXPERIENCE.len() + 1, STEP)>
                            <div class="card">
                                <h3 class="card__title">"Leadership Positions"</h3>
                                {LEADERSHIP
                                    .iter()
                                    .map(|l| view! {
                                        <div class="leadership">
                                            <div class="leadership__header">
                                                <p class="leadership__position">{l.position}</p>
                                                <p class="leadership__period">{l.period}</p>
                                            </div>
                                            <p class="leadership__description">{l.description}</p>
                                        </div>
                                    })
                                    .collect_view()}
                            </div>
                        </FadeIn>
                    </div>
                </div>
            </section>
        </div>
    }
}

#[component]
fn RoleCard(role: Role) -> impl IntoView {
    view! {
        <div class="card">
            <div class="card__header">
                <div>
                    <h3 class="card__title">{role.title}</h3>
                    <p class="card__subtitle">{role.organization}</p>
                </div>
                <p class="card__period">{role.period}</p>
            </div>
            <ul class="card__bullets">
                {role.highlights.iter().map(|h| view! { <li>{*h}</li> }).collect_view()}
            </ul>
        </div>
    }
}
