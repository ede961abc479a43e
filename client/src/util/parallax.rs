//! Scroll-linked parallax offsets.

use leptos::prelude::*;

#[cfg(test)]
#[path = "parallax_test.rs"]
mod parallax_test;

pub const DEFAULT_PARALLAX_SPEED: f64 = 0.1;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ParallaxDirection {
    #[default]
    Up,
    Down,
    Left,
    Right,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParallaxOptions {
    pub speed: f64,
    pub direction: ParallaxDirection,
    pub reverse: bool,
}

impl Default for ParallaxOptions {
    fn default() -> Self {
        Self { speed: DEFAULT_PARALLAX_SPEED, direction: ParallaxDirection::default(), reverse: false }
    }
}

impl ParallaxOptions {
    pub fn speed(mut self, speed: f64) -> Self {
        self.speed = speed;
        self
    }

    pub fn direction(mut self, direction: ParallaxDirection) -> Self {
        self.direction = direction;
        self
    }

    pub fn reverse(mut self, reverse: bool) -> Self {
        self.reverse = reverse;
        self
    }
}

/// Signed displacement for a scroll `offset`.
pub fn parallax_value(offset: f64, options: ParallaxOptions) -> f64 {
    let sign = if options.reverse { -1.0 } else { 1.0 };
    offset * options.speed * sign
}

/// CSS `transform` for a scroll `offset`.
pub fn parallax_transform(offset: f64, options: ParallaxOptions) -> String {
    let v = parallax_value(offset, options);
    let (axis, shift) = match options.direction {
        ParallaxDirection::Up => ('Y', -v),
        ParallaxDirection::Down => ('Y', v),
        ParallaxDirection::Left => ('X', -v),
        ParallaxDirection::Right => ('X', v),
    };
    // Adding +0.0 turns -0.0 into 0.0 so the string never reads "-0px".
    format!("translate{axis}({}px)", shift + 0.0)
}

/// Reactive `transform` string following the window scroll position.
pub fn use_parallax(options: ParallaxOptions) -> Signal<String> {
    let metrics = super::scroll::use_scroll_metrics();
    Signal::derive(move || parallax_transform(metrics.get().scroll_y, options))
}
