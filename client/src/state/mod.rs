//! Client-side state shared through Leptos context.
//!
//! SYSTEM CONTEXT
//! ==============
//! `theme` is the framework-free theme state machine and `theme_context` its
//! reactive handle. `toast`, `contact` and `ui` are plain structs held in
//! `RwSignal`s provided by the app root or the owning component.

pub mod contact;
pub mod theme;
pub mod theme_context;
pub mod toast;
pub mod ui;
