//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser concerns (storage, media queries, timers,
//! scroll and intersection observers) from component logic. Each keeps its
//! math in plain functions so native tests can cover it.

pub mod in_view;
pub mod parallax;
pub mod reveal;
pub mod scroll;
pub mod theme_dom;
pub mod timers;
