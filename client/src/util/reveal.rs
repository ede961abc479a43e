//! Inline styles for elements that animate in when scrolled into view.

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

pub const DEFAULT_REVEAL_DURATION: f64 = 0.5;
pub const DEFAULT_REVEAL_DISTANCE: f64 = 20.0;
pub const DEFAULT_REVEAL_SCALE: f64 = 0.95;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RevealVariant {
    #[default]
    Fade,
    Slide,
    Scale,
    /// Movement only, no opacity change.
    None,
}

/// Direction the element travels while revealing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RevealDirection {
    #[default]
    Up,
    Down,
    Left,
    Right,
}

impl RevealDirection {
    /// Starting `(x, y)` offset for a reveal covering `distance` pixels.
    pub fn start_offset(self, distance: f64) -> (f64, f64) {
        match self {
            Self::Up => (0.0, distance),
            Self::Down => (0.0, -distance),
            Self::Left => (distance, 0.0),
            Self::Right => (-distance, 0.0),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Reveal {
    pub variant: RevealVariant,
    pub direction: RevealDirection,
    /// Seconds before the transition starts.
    pub delay: f64,
    /// Transition length in seconds.
    pub duration: f64,
    pub distance: f64,
    pub scale: f64,
}

impl Default for Reveal {
    fn default() -> Self {
        Self {
            variant: RevealVariant::default(),
            direction: RevealDirection::default(),
            delay: 0.0,
            duration: DEFAULT_REVEAL_DURATION,
            distance: DEFAULT_REVEAL_DISTANCE,
            scale: DEFAULT_REVEAL_SCALE,
        }
    }
}

impl Reveal {
    pub fn slide_up() -> Self {
        Self { variant: RevealVariant::Slide, direction: RevealDirection::Up, ..Self::default() }
    }

    pub fn scale_in() -> Self {
        Self { variant: RevealVariant::Scale, ..Self::default() }
    }

    pub fn delay(mut self, delay: f64) -> Self {
        self.delay = delay.max(0.0);
        self
    }

    pub fn direction(mut self, direction: RevealDirection) -> Self {
        self.direction = direction;
        self
    }

    /// Delay for the `index`-th item of a staggered group.
    pub fn staggered(self, index: usize, step: f64) -> Self {
        #[allow(clippy::cast_precision_loss)]
        let offset = index as f64 * step;
        self.delay(self.delay + offset)
    }

    /// Inline CSS for the hidden or revealed state.
    pub fn style(&self, visible: bool) -> String {
        let opacity = match (self.variant, visible) {
            (RevealVariant::None, _) | (_, true) => 1.0,
            (_, false) => 0.0,
        };
        let (x, y) = if visible { (0.0, 0.0) } else { self.direction.start_offset(self.distance) };
        let scale = if !visible && self.variant == RevealVariant::Scale { self.scale } else { 1.0 };
        let timing = format!("{}s ease-out {}s", self.duration, self.delay);
        format!(
            "opacity: {opacity}; transform: translate({}px, {}px) scale({scale}); \
             transition: opacity {timing}, transform {timing};",
            x + 0.0,
            y + 0.0,
        )
    }
}
