//! About section: education, experience, leadership, skills, certifications.

use leptos::prelude::*;

use crate::components::reveal::{FadeIn, SlideUp};
use crate::content::profile::{CERTIFICATIONS, EDUCATION, EXPERIENCE, LEADERSHIP, PROFILE, SKILLS};
use crate::util::reveal::{Reveal, RevealDirection};

/// Delay before the first skill appears and the step between skills, seconds.
const SKILL_STAGGER: (f64, f64) = (0.6, 0.05);

#[component]
pub fn AboutSection() -> impl IntoView {
    let (skill_start, skill_step) = SKILL_STAGGER;

    view! {
        <section class="section section--tinted" id="about">
            <div class="container about">
                <div class="about__text">
                    <SlideUp delay=0.1>
                        <h2 class="heading heading--rule">"About Me"</h2>
                    </SlideUp>

                    <SlideUp delay=0.2>
                        <h3 class="about__heading">"Education"</h3>
                        <ul class="about__list">
                            {EDUCATION
                                .iter()
                                .map(|e| view! {
                                    <li class="about__entry">
                                        <span class="about__entry-title">{e.school}</span>
                                        <span>{e.detail}</span>
                                    </li>
                                })
                                .collect_view()}
                        </ul>
                    </SlideUp>

                    <SlideUp delay=0.3>
                        <h3 class="about__heading">"Experience"</h3>
                        {EXPERIENCE
                            .iter()
                            .map(|role| view! {
                                <div class="about__role">
                                    <div class="about__role-header">
                                        <span class="about__entry-title">
                                            {format!("{} | {}", role.organization, role.title)}
                                        </span>
                                        <span class="about__period">{role.period}</span>
                                    </div>
                                    <ul class="about__bullets">
                                        {role.highlights.iter().map(|h| view! { <li>{*h}</li> }).collect_view()}
                                    </ul>
                                </div>
                            })
                            .collect_view()}
                    </SlideUp>

                    <SlideUp delay=0.4>
                        <h3 class="about__heading">"Leadership & Responsibilities"</h3>
                        <ul class="about__bullets">
                            {LEADERSHIP
                                .iter()
                                .map(|l| view! { <li>{format!("{} ({})", l.position, l.period)}</li> })
                                .collect_view()}
                        </ul>
                    </SlideUp>

                    <SlideUp delay=0.5>
                        <h3 class="about__heading">"Skills"</h3>
                        <div class="about__skills">
                            {SKILLS
                                .iter()
                                .enumerate()
                                .map(|(i, skill)| {
                                    let reveal = Reveal::default()
                                        .direction(RevealDirection::Right)
                                        .delay(skill_start)
                                        .staggered(i, skill_step);
                                    view! {
                                        <FadeIn reveal=reveal class="about__skill">
                                            <span class="accent">"▹"</span>
                                            {*skill}
                                        </FadeIn>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </SlideUp>

                    <SlideUp delay=0.6>
                        <h3 class="about__heading">"Certifications"</h3>
                        <ul class="about__bullets">
                            {CERTIFICATIONS.iter().map(|c| view! { <li>{*c}</li> }).collect_view()}
                        </ul>
                    </SlideUp>
                </div>

                <FadeIn class="about__portrait" reveal=Reveal::scale_in() delay=0.3>
                    <div class="portrait" role="img" aria-label=PROFILE.name>
                        <span class="portrait__initials">{PROFILE.initials}</span>
                    </div>
                </FadeIn>
            </div>
        </section>
    }
}
