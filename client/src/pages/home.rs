//! Landing page: hero beside the portrait monogram.

use leptos::prelude::*;

use crate::components::hero::Hero;
use crate::components::reveal::FadeIn;
use crate::content::profile::PROFILE;
use crate::util::reveal::Reveal;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="page page--home">
            <div class="container home">
                <div class="home__hero">
                    <Hero/>
                </div>
                <FadeIn class="home__portrait" reveal=Reveal::scale_in()>
                    <div class="portrait portrait--glow" role="img" aria-label=PROFILE.name>
                        <span class="portrait__initials">{PROFILE.initials}</span>
                    </div>
                </FadeIn>
            </div>
        </div>
    }
}
