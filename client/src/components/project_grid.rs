//! Project cards with hover-raised descriptions.

use leptos::prelude::*;

use crate::components::reveal::{FadeIn, SlideUp};
use crate::content::projects::{PROJECTS, Project};
use crate::util::reveal::Reveal;

/// Seconds between consecutive cards appearing.
const CARD_STAGGER: f64 = 0.1;

#[component]
pub fn ProjectGrid() -> impl IntoView {
    view! {
        <section class="section" id="projects">
            <div class="container">
                <SlideUp class="section__intro">
                    <h2 class="heading heading--center">"Projects I've Built"</h2>
                    <p class="section__lead">
                        "A showcase of my technical skills and problem-solving abilities. These projects \
                         demonstrate my experience in data analysis, web development, and financial technology."
                    </p>
                </SlideUp>
                <div class="projects">
                    {PROJECTS
                        .iter()
                        .enumerate()
                        .map(|(i, project)| {
                            view! {
                                <FadeIn reveal=Reveal::slide_up().staggered(i, CARD_STAGGER)>
                                    <ProjectCard project=*project/>
                                </FadeIn>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn ProjectCard(project: Project) -> impl IntoView {
    view! {
        <article class="project-card">
            <div class="project-card__media">
                <img class="project-card__icon" src=project.image alt=project.title/>
                <div class="project-card__shade"></div>
            </div>
            <div class="project-card__content">
                <h3 class="project-card__title">{project.title}</h3>
                <div class="project-card__description">
                    <p>{project.description}</p>
                </div>
                <div class="project-card__tags">
                    {project.tags.iter().map(|tag| view! { <span class="tag">{*tag}</span> }).collect_view()}
                </div>
                <div class="project-card__links">
                    {project.links.github.map(|href| view! {
                        <a class="icon-link" href=href target="_blank" rel="noopener noreferrer" aria-label="Source on GitHub">
                            "GitHub"
                        </a>
                    })}
                    {project.links.live.map(|href| view! {
                        <a class="icon-link" href=href target="_blank" rel="noopener noreferrer" aria-label="Live demo">
                            "Live ↗"
                        </a>
                    })}
                </div>
            </div>
        </article>
    }
}
