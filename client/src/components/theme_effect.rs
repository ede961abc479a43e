//! Full-screen overlay played while the theme switches.
//!
//! The overlay is purely decorative (`pointer-events: none`) and is mounted
//! only while `ThemeContext::transitioning()` holds, so the coordinator's
//! timers decide how long it stays.

use leptos::prelude::*;

use crate::state::theme_context::ThemeContext;

#[cfg(test)]
#[path = "theme_effect_test.rs"]
mod theme_effect_test;

pub const PARTICLE_COUNT: usize = 8;
pub const PARTICLE_RADIUS: f64 = 80.0;

/// End positions of `count` particles spread evenly on a ring, starting at
/// the bottom and moving clockwise.
pub fn particle_offsets(count: usize, radius: f64) -> Vec<(f64, f64)> {
    if count == 0 {
        return Vec::new();
    }
    #[allow(clippy::cast_precision_loss)]
    let step = std::f64::consts::TAU / count as f64;
    (0..count)
        .map(|i| {
            #[allow(clippy::cast_precision_loss)]
            let angle = step * i as f64;
            (angle.sin() * radius, angle.cos() * radius)
        })
        .collect()
}

#[component]
pub fn ThemeEffect() -> impl IntoView {
    let theme = ThemeContext::expect();
    let particles = particle_offsets(PARTICLE_COUNT, PARTICLE_RADIUS);

    view! {
        <Show when=move || theme.transitioning()>
            <div class="theme-effect" aria-hidden="true">
                <div
                    class="theme-effect__backdrop"
                    class:theme-effect__backdrop--dark=move || theme.resolved().is_dark()
                ></div>
                <div class="theme-effect__particles">
                    {particles
                        .iter()
                        .map(|(dx, dy)| {
                            let style = format!("--dx: {dx:.2}px; --dy: {dy:.2}px;");
                            view! { <span class="theme-effect__particle" style=style></span> }
                        })
                        .collect_view()}
                </div>
            </div>
        </Show>
    }
}
