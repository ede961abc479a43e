//! Landing hero: greeting, name, contact line, and decorative background.

use leptos::html::Div;
use leptos::prelude::*;

use crate::components::reveal::FadeIn;
use crate::content::profile::PROFILE;
use crate::util::parallax::{ParallaxOptions, use_parallax};
use crate::util::reveal::Reveal;

#[cfg(test)]
#[path = "hero_test.rs"]
mod hero_test;

pub const HERO_PARTICLE_COUNT: usize = 30;

/// Fraction of the pointer offset a particle follows.
pub const POINTER_DRIFT: f64 = 0.02;

/// Placement of one floating background dot.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HeroParticle {
    /// Diameter in px, `4..=12`.
    pub size: u32,
    /// Horizontal position in percent of the hero width.
    pub left: u32,
    /// Vertical position in percent of the hero height.
    pub top: u32,
    /// Animation delay in tenths of a second.
    pub delay: u32,
}

/// Deterministic particle layout so server and client markup agree.
pub fn hero_particle(index: usize) -> HeroParticle {
    let mut x = u32::try_from(index).unwrap_or(u32::MAX).wrapping_add(1);
    x = ((x >> 16) ^ x).wrapping_mul(0x045d_9f3b);
    x = ((x >> 16) ^ x).wrapping_mul(0x045d_9f3b);
    x ^= x >> 16;
    HeroParticle {
        size: 4 + x % 9,
        left: (x >> 4) % 100,
        top: (x >> 12) % 100,
        delay: (x >> 20) % 40,
    }
}

/// Pixel shift of particle `index` for a pointer `(dx, dy)` away from the
/// layer center. Every third particle holds still, the others drift toward
/// or away from the pointer.
pub fn particle_drift(index: usize, dx: f64, dy: f64) -> (f64, f64) {
    let sign = match index % 3 {
        0 => -1.0,
        1 => 0.0,
        _ => 1.0,
    };
    (dx * POINTER_DRIFT * sign + 0.0, dy * POINTER_DRIFT * sign + 0.0)
}

/// Pointer position relative to the center of `layer`, `(0, 0)` until the
/// first mouse move and during SSR.
fn use_pointer_offset(layer: NodeRef<Div>) -> ReadSignal<(f64, f64)> {
    let (offset, set_offset) = signal((0.0, 0.0));

    #[cfg(feature = "hydrate")]
    {
        let handle = window_event_listener(leptos::ev::mousemove, move |ev| {
            let Some(el) = layer.get_untracked() else {
                return;
            };
            let rect = el.get_bounding_client_rect();
            let x = f64::from(ev.client_x()) - rect.left() - rect.width() / 2.0;
            let y = f64::from(ev.client_y()) - rect.top() - rect.height() / 2.0;
            set_offset.set((x, y));
        });
        on_cleanup(move || handle.remove());
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (layer, set_offset);
    }

    offset
}

#[component]
pub fn Hero() -> impl IntoView {
    let background = use_parallax(ParallaxOptions::default().speed(0.15));
    let headline = use_parallax(ParallaxOptions::default().speed(0.08));
    let phones = PROFILE.phones.join(" | ");
    let layer = NodeRef::<Div>::new();
    let pointer = use_pointer_offset(layer);

    view! {
        <section class="hero" id="home">
            <div class="hero__particles" node_ref=layer aria-hidden="true">
                {(0..HERO_PARTICLE_COUNT)
                    .map(|i| {
                        let p = hero_particle(i);
                        let style = format!(
                            "width: {0}px; height: {0}px; left: {1}%; top: {2}%; animation-delay: {3}.{4}s;",
                            p.size,
                            p.left,
                            p.top,
                            p.delay / 10,
                            p.delay % 10,
                        );
                        let style = move || {
                            let (dx, dy) = pointer.get();
                            let (x, y) = particle_drift(i, dx, dy);
                            format!("{style} translate: {x:.1}px {y:.1}px;")
                        };
                        view! { <span class="hero__particle" style=style></span> }
                    })
                    .collect_view()}
            </div>
            <div class="hero__shape" style:transform=move || background.get() aria-hidden="true"></div>

            <div class="hero__content">
                <FadeIn reveal=Reveal::slide_up() delay=0.2>
                    <p class="hero__greeting">"Hi, my name is"</p>
                </FadeIn>
                <FadeIn reveal=Reveal::slide_up() delay=0.4>
                    <h1 class="hero__title" style:transform=move || headline.get()>
                        <span class="hero__name">{PROFILE.name}</span>
                        <span class="hero__tagline">{PROFILE.tagline}</span>
                    </h1>
                </FadeIn>
                <FadeIn reveal=Reveal::slide_up() delay=0.6>
                    <div class="hero__summary">
                        <p>
                            <span class="accent">"Contact: "</span>
                            {format!("{phones} | {}", PROFILE.email)}
                        </p>
                        <p>{PROFILE.summary}</p>
                    </div>
                </FadeIn>
            </div>

            <div class="hero__watermark" aria-hidden="true">
                <div class="hero__stamp">
                    <div class="hero__stamp-main">"CLASSIFIED"</div>
                    <div class="hero__stamp-sub">"TOP SECRET"</div>
                    <div class="hero__stamp-band">"FEDERAL BUREAU OF INVESTIGATION"</div>
                </div>
            </div>
        </section>
    }
}
